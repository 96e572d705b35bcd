//! Group orders and vertex counts for every catalog symbol.
//!
//! Purpose
//! - Quick sanity table when touching the generator: each row should read
//!   `ok` with chambers equal to the closed-form order.
//!
//! Run: `cargo run -p wythoff --example order_table`

use std::time::Instant;

use wythoff::symbol::{Symbol3, Symbol4};
use wythoff::tiling::{Tiling3, Tiling4};

fn main() {
    println!("dim symbol chambers vertices ms status");
    for symbol in Symbol3::catalog() {
        let start = Instant::now();
        let row = Tiling3::new(symbol).map(|t| (t.order(), t.vertices().len()));
        print_row(3, &symbol.to_string(), row, start);
    }
    for page in Symbol4::catalog() {
        println!("# {}", page.title);
        for symbol in page.symbols {
            let start = Instant::now();
            let row = Tiling4::new(symbol).map(|t| (t.order(), t.vertices().len()));
            print_row(4, &symbol.to_string(), row, start);
        }
    }
}

fn print_row(
    dim: usize,
    symbol: &str,
    row: Result<(usize, usize), wythoff::WythoffError>,
    start: Instant,
) {
    let ms = start.elapsed().as_secs_f64() * 1e3;
    match row {
        Ok((chambers, vertices)) => {
            println!("{dim} [{symbol}] {chambers} {vertices} {ms:.2} ok")
        }
        Err(e) => println!("{dim} [{symbol}] - - {ms:.2} {e}"),
    }
}
