//! Built-in question set

/// Questions seeded into an empty database.
pub fn default_questions() -> &'static [(&'static str, &'static str)] {
    &[
        ("What does CPU stand for? ", "central processing unit"),
        ("What does GPU stand for? ", "graphics processing unit"),
        ("What does RAM stand for? ", "random access memory"),
        ("What does PSU stand for? ", "power supply"),
        ("What does SSD stand for? ", "solid state drive"),
        ("What does HDD stand for? ", "hard disk drive"),
        ("What does USB stand for? ", "universal serial bus"),
    ]
}
