use ordkit::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut users = vec![
        Record::new("sarah", 28),
        Record::new("james", 35),
        Record::new("mary", 33),
        Record::new("john", 24),
        Record::new("john", 25),
    ];

    let cmp = compare_by(|r: &Record| r.name.clone())
        .then_by_key(|r: &Record| r.age)
        .reversed();

    sort_in_place(&mut users, &cmp);

    for user in &users {
        println!("{user}");
    }
}
