use nanofaker_generate::{Faker, registry};

fn main() {
    let mut faker = Faker::new(Some(1));
    for category in registry().categories() {
        for entry in registry().methods(category) {
            match entry.generate(&mut faker) {
                Ok(example) => println!("{:<28} {example}", entry.id()),
                Err(err) => println!("{:<28} <{err}>", entry.id()),
            }
        }
    }
}
