use ordkit::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut words = [
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ]
    .map(String::from)
    .to_vec();

    sort_in_place(&mut words, &natural());
    println!("{words:?}");

    // stable, so words of equal length keep their alphabetical order
    sort_in_place(&mut words, &compare_by(|s: &String| s.len()));
    println!("{words:?}");
}
