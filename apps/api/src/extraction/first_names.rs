/// Common first names used to split concatenated email local-parts such as
/// `dixitnahar`. Each entry carries its byte length so the prefix split point is
/// part of the table. Lower-case ASCII only.
pub const COMMON_FIRST_NAMES: &[(&str, usize)] = &[
    // English, male-associated
    ("john", 4),
    ("james", 5),
    ("michael", 7),
    ("david", 5),
    ("robert", 6),
    ("william", 7),
    ("richard", 7),
    ("thomas", 6),
    ("daniel", 6),
    ("matthew", 7),
    // English, female-associated
    ("mary", 4),
    ("jennifer", 8),
    ("sarah", 5),
    ("jessica", 7),
    ("emily", 5),
    ("emma", 4),
    ("olivia", 6),
    ("anna", 4),
    // South Asian, male-associated
    ("rahul", 5),
    ("amit", 4),
    ("rohan", 5),
    ("arjun", 5),
    ("vikram", 6),
    ("dixit", 5),
    ("ravi", 4),
    ("suresh", 6),
    ("deepak", 6),
    ("aditya", 6),
    ("sanjay", 6),
    // South Asian, female-associated
    ("priya", 5),
    ("neha", 4),
    ("ananya", 6),
    ("pooja", 5),
    ("sneha", 5),
    ("kavya", 5),
    ("anjali", 6),
];

/// Longest first name that `local` starts with, as `(name, length)`.
pub fn longest_prefix_match(local: &str) -> Option<(&'static str, usize)> {
    COMMON_FIRST_NAMES
        .iter()
        .filter(|(name, _)| local.starts_with(name))
        .max_by_key(|(_, len)| *len)
        .copied()
}
