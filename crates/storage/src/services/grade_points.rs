use rust_decimal::Decimal;

/// Bonus points per grade as `(grade, mantissa, scale)`.
const GRADE_TABLE: &[(&str, i64, u32)] = &[
    ("A+", 10, 0),
    ("A", 9, 0),
    ("A-", 8, 0),
    ("B+", 7, 0),
    ("B", 6, 0),
    ("B-", 5, 0),
    ("C+", 4, 0),
    ("C", 3, 0),
    ("C-", 2, 0),
    ("D+", 1, 0),
    ("D", 5, 1),
    ("D-", 25, 2),
    ("E+", 1, 1),
    ("E", 5, 2),
    ("E-", 1, 2),
    ("F", 0, 0),
];

/// Bonus points awarded on top of the position points for a grade.
///
/// The lookup is exact and case-sensitive: `"a+"`, `" A"` and `""` all
/// resolve to zero, as does anything not in the table.
pub fn grade_points(grade: &str) -> Decimal {
    GRADE_TABLE
        .iter()
        .find(|(name, _, _)| *name == grade)
        .map(|&(_, mantissa, scale)| Decimal::new(mantissa, scale))
        .unwrap_or(Decimal::ZERO)
}

/// Whether `grade` is one of the graded marks, `F` included.
pub fn is_known_grade(grade: &str) -> bool {
    GRADE_TABLE.iter().any(|(name, _, _)| *name == grade)
}
