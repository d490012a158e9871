use rand::Rng;

/// Printed after a correct answer.
const COMPLIMENTS: [&str; 8] = [
    "Well done!",
    "Very neat!",
    "So clever!",
    "Yesssss!",
    "Brill...iant!",
    "Fantastic!",
    "Keep it up!",
    ":-)",
];

/// Printed after a wrong answer.
const MOTIVATIONS: [&str; 6] = [
    "Too bad!",
    "Keep at it!",
    "No, sorry!",
    "That's not right",
    ":-(",
    "Blehhhhhhhhhh!",
];

/// Pick a random compliment.
pub fn compliment<R: Rng>(rng: &mut R) -> &'static str {
    COMPLIMENTS[rng.random_range(0..COMPLIMENTS.len())]
}

/// Pick a random motivational phrase.
pub fn motivation<R: Rng>(rng: &mut R) -> &'static str {
    MOTIVATIONS[rng.random_range(0..MOTIVATIONS.len())]
}

/// Final verdict for a finished session, selected by score percentage.
///
/// Brackets compare strictly, so exactly 80% falls into the "more than 60"
/// bracket and exactly 60% into the "more than 40" one.
pub fn summary(right: u32, rounds: u32) -> String {
    let pct = ((100.0 / rounds as f64) * right as f64).round() as u32;

    if pct == 100 {
        "How fantastic! You got EVERYTHING right! Congratulations, smarty!".to_string()
    } else if pct > 80 {
        format!("Super neat! You got {} out of {} right!", right, rounds)
    } else if pct > 60 {
        format!("Well done you! You got {} out of {} right!", right, rounds)
    } else if pct > 40 {
        format!(
            "Oh, just short of a pass! :-( You got {} out of {} right!",
            right, rounds
        )
    } else if pct > 20 {
        format!(
            "You did your best! Better luck next time! You got {} out of {} right!",
            right, rounds
        )
    } else {
        "Too bad, you got none of the answers right. Keep practicing!".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_feedback_phrases_come_from_the_fixed_pools() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..32 {
            assert!(COMPLIMENTS.contains(&compliment(&mut rng)));
            assert!(MOTIVATIONS.contains(&motivation(&mut rng)));
        }
    }

    #[test]
    fn test_summary_brackets_for_a_ten_round_session() {
        assert_eq!(
            summary(10, 10),
            "How fantastic! You got EVERYTHING right! Congratulations, smarty!"
        );
        assert_eq!(summary(9, 10), "Super neat! You got 9 out of 10 right!");
        assert_eq!(summary(7, 10), "Well done you! You got 7 out of 10 right!");
        assert_eq!(
            summary(5, 10),
            "Oh, just short of a pass! :-( You got 5 out of 10 right!"
        );
        assert_eq!(
            summary(3, 10),
            "You did your best! Better luck next time! You got 3 out of 10 right!"
        );
        assert_eq!(
            summary(0, 10),
            "Too bad, you got none of the answers right. Keep practicing!"
        );
    }

    #[test]
    fn test_summary_boundaries_compare_strictly() {
        // exactly 80% is not "more than 80"
        assert_eq!(summary(8, 10), "Well done you! You got 8 out of 10 right!");
        // exactly 60% is not "more than 60"
        assert_eq!(
            summary(6, 10),
            "Oh, just short of a pass! :-( You got 6 out of 10 right!"
        );
        // exactly 20% is not "more than 20"
        assert_eq!(
            summary(2, 10),
            "Too bad, you got none of the answers right. Keep practicing!"
        );
    }
}
