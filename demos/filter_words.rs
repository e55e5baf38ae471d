use ordkit::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut words = ["one", "two", "three", "four", "five"]
        .map(String::from)
        .to_vec();

    let starts_with_t = predicate(|s: &String| s.starts_with('t'));
    filter_out(&mut words, &starts_with_t.not());

    for word in &words {
        println!("{word}");
    }
}
