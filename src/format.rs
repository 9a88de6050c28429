/// Compact rupee price label used on listing cards (crore, lakh, thousand)
pub fn format_price(price: u64) -> String {
    let value = price as f64;
    if price >= 10_000_000 {
        format!("₹{:.1}Cr", value / 10_000_000.0)
    } else if price >= 100_000 {
        format!("₹{:.1}L", value / 100_000.0)
    } else if price >= 1_000 {
        format!("₹{:.1}K", value / 1_000.0)
    } else {
        format!("₹{}", price)
    }
}
