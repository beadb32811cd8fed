//! `studymate features` and `studymate flashcards`.

/// Every feature with the command that opens it.
pub const FEATURES: [(&str, &str); 5] = [
    ("To-Do List", "studymate todo list"),
    ("Pomodoro Timer", "studymate timer"),
    ("Motivation Quotes", "studymate quote"),
    ("Flashcards", "studymate flashcards"),
    ("Study Search", "studymate search <query>"),
];

/// Prints the feature index.
pub fn features() {
    println!("Welcome to StudyMate");
    println!("Your companion for focused, organised study.\n");
    let lengths = FEATURES.iter().map(|(name, _)| name.len());
    let width = lengths.max().unwrap_or(0);
    for (name, command) in FEATURES {
        println!("  {name:<width$}  {command}");
    }
}

/// Prints the flashcards placeholder.
pub fn flashcards() {
    println!("Flashcards");
    println!("Coming soon...");
}
