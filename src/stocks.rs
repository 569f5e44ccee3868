//! Best time to buy and sell one share.
//!
//! `prices[i]` is the price on day i. Pick one day to buy and a strictly
//! later day to sell; maximize the profit, or return 0 when every trade
//! loses money.

/// Try every buy/sell pair. O(n^2), kept as the oracle for the single pass.
pub fn max_profit_brute(prices: &[i32]) -> i32 {
    let mut best = 0;
    for i in 0..prices.len() {
        for j in i + 1..prices.len() {
            best = best.max(prices[j] - prices[i]);
        }
    }
    best
}

/// Single pass: track the cheapest price seen so far and the best profit a
/// sale today would realize against it. O(n) time, O(1) space.
pub fn max_profit(prices: &[i32]) -> i32 {
    let mut min_price = i32::MAX;
    let mut best = 0;

    for &price in prices {
        min_price = min_price.min(price);
        best = best.max(price - min_price);
    }
    best
}
