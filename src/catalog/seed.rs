//! First-run seed data for the catalog store.

use super::{Book, Level};

/// The fixed seed collection written to the store on first run.
///
/// Ids are assigned once here and stay stable; the engine never creates or
/// deletes books after start-up.
pub fn seed_books() -> Vec<Book> {
    vec![
        book(
            1,
            "The Rust Programming Language",
            "Steve Klabnik and Carol Nichols",
            29.95,
            Level::Middle,
            &["rust", "systems"],
            7,
        ),
        book(
            2,
            "Programming Rust",
            "Jim Blandy",
            49.99,
            Level::Pro,
            &["rust", "systems"],
            4,
        ),
        book(
            3,
            "Rust for Rustaceans",
            "Jon Gjengset",
            39.99,
            Level::Pro,
            &["rust", "advanced"],
            5,
        ),
        book(
            4,
            "Automate the Boring Stuff with Python",
            "Al Sweigart",
            14.50,
            Level::Beginner,
            &["python", "scripting"],
            12,
        ),
        book(
            5,
            "Learn You a Haskell for Great Good!",
            "Miran Lipovaca",
            12.99,
            Level::Beginner,
            &["haskell", "functional"],
            9,
        ),
        book(
            6,
            "The Pragmatic Programmer",
            "Andrew Hunt and David Thomas",
            34.90,
            Level::Middle,
            &["craft", "practices"],
            6,
        ),
        book(
            7,
            "Clean Code",
            "Robert C. Martin",
            27.80,
            Level::Middle,
            &["craft", "practices"],
            8,
        ),
        book(
            8,
            "Designing Data-Intensive Applications",
            "Martin Kleppmann",
            44.99,
            Level::Pro,
            &["databases", "distributed"],
            3,
        ),
        book(
            9,
            "Eloquent JavaScript",
            "Marijn Haverbeke",
            9.99,
            Level::Beginner,
            &["javascript", "web"],
            15,
        ),
        book(
            10,
            "Effective Modern C++",
            "Scott Meyers",
            42.50,
            Level::Pro,
            &["c++", "advanced"],
            2,
        ),
        book(
            11,
            "Grokking Algorithms",
            "Aditya Bhargava",
            24.99,
            Level::Beginner,
            &["algorithms", "illustrated"],
            10,
        ),
        book(
            12,
            "Structure and Interpretation of Computer Programs",
            "Harold Abelson and Gerald Jay Sussman",
            18.95,
            Level::Middle,
            &["scheme", "classics"],
            5,
        ),
    ]
}

fn book(
    id: u32,
    title: &str,
    author: &str,
    price: f64,
    level: Level,
    tags: &[&str],
    amount: u32,
) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        price,
        level,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        amount,
    }
}
