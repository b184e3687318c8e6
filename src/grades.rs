// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Lukko - Grade Comparator
 * Total order over the service's letter-grade scale
 *
 * @copyright 2025 Bountyy Oy
 * @license Proprietary
 */

use std::cmp::Ordering;

/// Service grade vocabulary, best to worst
const GRADE_SCALE: [&str; 16] = [
    "A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "D-", "E", "F", "T", "M",
];

/// Numeric score for a grade; higher is better, `None` for grades outside
/// the vocabulary
fn grade_score(grade: &str) -> Option<usize> {
    GRADE_SCALE
        .iter()
        .position(|&g| g == grade)
        .map(|pos| GRADE_SCALE.len() - 1 - pos)
}

/// Compare two grades. `Greater` means `a` is the better (more secure)
/// grade. Grades outside the vocabulary fall back to plain string order,
/// a degraded mode not expected for well-formed service output.
pub fn compare_grades(a: &str, b: &str) -> Ordering {
    match (grade_score(a), grade_score(b)) {
        (Some(score_a), Some(score_b)) => score_a.cmp(&score_b),
        _ => a.cmp(b),
    }
}

/// Worst grade in `grades` by [`compare_grades`]; `None` on empty input,
/// which callers must guard against.
pub fn worst_grade<'a>(grades: &[&'a str]) -> Option<&'a str> {
    let mut iter = grades.iter();
    let mut worst = *iter.next()?;
    for grade in iter {
        if compare_grades(grade, worst) == Ordering::Less {
            worst = grade;
        }
    }
    Some(worst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_follows_scale() {
        assert_eq!(compare_grades("A+", "F"), Ordering::Greater);
        assert_eq!(compare_grades("F", "A+"), Ordering::Less);
        assert_eq!(compare_grades("B", "B"), Ordering::Equal);
        assert_eq!(compare_grades("T", "M"), Ordering::Greater);
        assert_eq!(compare_grades("A-", "A"), Ordering::Less);
        assert_eq!(compare_grades("C+", "C"), Ordering::Greater);
    }

    #[test]
    fn compare_is_a_strict_total_order() {
        const SCALE: [&str; 16] = [
            "A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "D-", "E", "F", "T",
            "M",
        ];

        // Antisymmetry and consistency with the documented table
        for (i, a) in SCALE.iter().enumerate() {
            for (j, b) in SCALE.iter().enumerate() {
                let expected = j.cmp(&i); // earlier in the table = better
                assert_eq!(compare_grades(a, b), expected, "{a} vs {b}");
                assert_eq!(compare_grades(b, a), expected.reverse(), "{b} vs {a}");
            }
        }

        // Transitivity over every ordered triple
        for a in SCALE.iter() {
            for b in SCALE.iter() {
                for c in SCALE.iter() {
                    if compare_grades(a, b) == Ordering::Greater
                        && compare_grades(b, c) == Ordering::Greater
                    {
                        assert_eq!(compare_grades(a, c), Ordering::Greater);
                    }
                }
            }
        }
    }

    #[test]
    fn unknown_grades_fall_back_to_string_order() {
        assert_eq!(compare_grades("Z", "A"), Ordering::Greater);
        assert_eq!(compare_grades("A", "Z"), Ordering::Less);
        assert_eq!(compare_grades("?", "?"), Ordering::Equal);
    }

    #[test]
    fn worst_grade_picks_the_minimum() {
        assert_eq!(worst_grade(&["A+", "C", "B-"]), Some("C"));
        assert_eq!(worst_grade(&["A"]), Some("A"));
        assert_eq!(worst_grade(&["F", "A+", "T"]), Some("T"));
        assert_eq!(worst_grade(&[]), None);
    }
}
