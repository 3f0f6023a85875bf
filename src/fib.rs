/// Naive doubly recursive Fibonacci. Inputs below 1 yield 0.
pub fn rfib(n: i64) -> u64 {
    if n < 1 {
        0
    } else if n == 1 {
        1
    } else {
        rfib(n - 1) + rfib(n - 2)
    }
}
