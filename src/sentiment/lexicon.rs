//! Rule-based compound polarity over a word-valence lexicon.
//!
//! Valences live on a `[-4, 4]` scale. Per-token valence is adjusted for
//! boosters, negation, capitalisation and a contrastive "but", summed, nudged
//! by `!`/`?` emphasis and squashed into `[-1, 1]` with `x / sqrt(x^2 + 15)`.

use super::SentimentScorer;
use crate::error::{FairfoundError, Result};
use std::collections::HashMap;
use std::path::Path;

const BOOSTER_INCREMENT: f64 = 0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const QUESTION_CEILING: f64 = 0.96;
const BOOSTER_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

const BUILTIN_LEXICON: &[(&str, f64)] = &[
    // positive
    ("acceptable", 1.3),
    ("accurate", 1.4),
    ("amazing", 2.8),
    ("appreciate", 2.0),
    ("appreciated", 2.1),
    ("awesome", 3.1),
    ("best", 3.2),
    ("better", 1.9),
    ("brilliant", 2.8),
    ("clear", 1.6),
    ("creative", 1.9),
    ("delighted", 3.0),
    ("dependable", 1.8),
    ("easy", 1.9),
    ("efficient", 1.7),
    ("excellent", 2.7),
    ("exceptional", 2.6),
    ("fantastic", 2.6),
    ("fine", 0.8),
    ("friendly", 2.2),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("impressive", 2.3),
    ("improvement", 1.6),
    ("improvements", 1.4),
    ("love", 3.2),
    ("loved", 2.9),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("polite", 1.6),
    ("proactive", 1.5),
    ("professional", 1.6),
    ("recommend", 1.5),
    ("recommended", 1.4),
    ("reliable", 1.9),
    ("satisfactory", 1.5),
    ("satisfied", 1.8),
    ("skilled", 1.9),
    ("smooth", 1.3),
    ("solid", 1.4),
    ("superb", 3.1),
    ("talented", 2.3),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("valuable", 2.1),
    ("wonderful", 2.7),
    // negative
    ("angry", -2.3),
    ("awful", -2.0),
    ("bad", -2.5),
    ("broken", -1.8),
    ("bug", -1.0),
    ("bugs", -1.0),
    ("careless", -1.5),
    ("confused", -1.3),
    ("confusing", -1.3),
    ("delay", -1.3),
    ("delayed", -1.2),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("error", -1.7),
    ("errors", -1.4),
    ("fail", -2.3),
    ("failed", -2.3),
    ("failure", -2.3),
    ("frustrating", -1.9),
    ("hate", -2.7),
    ("horrible", -2.5),
    ("ignored", -1.6),
    ("incomplete", -1.0),
    ("infrequent", -0.8),
    ("lacking", -1.2),
    ("mess", -1.5),
    ("messy", -1.2),
    ("missed", -1.2),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("rude", -2.0),
    ("sloppy", -1.6),
    ("terrible", -2.1),
    ("unclear", -1.0),
    ("unprofessional", -1.9),
    ("unresponsive", -1.6),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

const BOOSTERS: &[&str] = &[
    "absolutely",
    "completely",
    "considerably",
    "deeply",
    "especially",
    "exceptionally",
    "extremely",
    "fully",
    "greatly",
    "highly",
    "hugely",
    "incredibly",
    "particularly",
    "really",
    "remarkably",
    "so",
    "substantially",
    "super",
    "thoroughly",
    "totally",
    "tremendously",
    "truly",
    "very",
];

const DAMPENERS: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "less",
    "little",
    "marginally",
    "occasionally",
    "partly",
    "scarcely",
    "slightly",
    "somewhat",
];

const NEGATIONS: &[&str] = &[
    "aint", "cannot", "cant", "despite", "didnt", "doesnt", "dont", "hadnt", "hasnt", "havent",
    "isnt", "neither", "never", "no", "nobody", "none", "nor", "not", "nothing", "nowhere",
    "rarely", "seldom", "shouldnt", "wasnt", "werent", "without", "wont", "wouldnt",
];

#[derive(Debug, Clone)]
pub struct LexiconScorer {
    valences: HashMap<String, f64>,
}

#[derive(Debug)]
struct Token {
    lower: String,
    shouting: bool,
}

impl LexiconScorer {
    pub fn builtin() -> Self {
        let valences = BUILTIN_LEXICON
            .iter()
            .map(|(word, valence)| ((*word).to_string(), *valence))
            .collect();
        Self { valences }
    }

    /// Loads a tab-separated lexicon: `token<TAB>mean_valence[<TAB>...]`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let valences = parse_lexicon(&content);
        if valences.is_empty() {
            return Err(FairfoundError::ConfigParse(format!(
                "lexicon has no usable entries: {}",
                path.display()
            )));
        }
        Ok(Self { valences })
    }

    pub fn entry_count(&self) -> usize {
        self.valences.len()
    }

    fn valence_at(&self, tokens: &[Token], index: usize, mixed_caps: bool) -> f64 {
        let token = &tokens[index];
        if booster_scalar(&token.lower) != 0.0 {
            return 0.0;
        }
        let Some(base) = self.valences.get(&token.lower).copied() else {
            return 0.0;
        };

        let mut valence = base;
        if token.shouting && mixed_caps {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        for distance in 1..=3 {
            if index < distance {
                break;
            }
            let previous = &tokens[index - distance];
            let boost = booster_scalar(&previous.lower);
            if boost != 0.0 {
                let scalar = if valence < 0.0 { -boost } else { boost };
                valence += scalar * BOOSTER_DAMPING[distance - 1];
            }
            if is_negation(&previous.lower) {
                valence *= NEGATION_SCALAR;
            }
        }
        valence
    }
}

impl SentimentScorer for LexiconScorer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }
        let shouting = tokens.iter().filter(|token| token.shouting).count();
        let mixed_caps = shouting > 0 && shouting < tokens.len();

        let mut valences: Vec<f64> = (0..tokens.len())
            .map(|index| self.valence_at(&tokens, index, mixed_caps))
            .collect();

        if let Some(pivot) = tokens.iter().position(|token| token.lower == "but") {
            for (index, valence) in valences.iter_mut().enumerate() {
                if index < pivot {
                    *valence *= 0.5;
                } else if index > pivot {
                    *valence *= 1.5;
                }
            }
        }

        let sum: f64 = valences.iter().sum();
        if sum == 0.0 {
            return 0.0;
        }
        let emphasis = punctuation_emphasis(text);
        let total = sum + emphasis.copysign(sum);
        normalize(total)
    }
}

fn parse_lexicon(content: &str) -> HashMap<String, f64> {
    content
        .lines()
        .filter_map(|line| {
            let mut columns = line.split('\t');
            let word = columns.next()?.trim();
            let valence = columns.next()?.trim().parse::<f64>().ok()?;
            if word.is_empty() {
                return None;
            }
            Some((word.to_lowercase(), valence))
        })
        .collect()
}

fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .filter_map(|raw| {
            let trimmed = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if trimmed.chars().count() <= 1 {
                return None;
            }
            let has_letters = trimmed.chars().any(char::is_alphabetic);
            let shouting = has_letters
                && trimmed
                    .chars()
                    .filter(|c| c.is_alphabetic())
                    .all(char::is_uppercase);
            Some(Token {
                lower: trimmed.to_lowercase(),
                shouting,
            })
        })
        .collect()
}

fn booster_scalar(word: &str) -> f64 {
    if BOOSTERS.contains(&word) {
        BOOSTER_INCREMENT
    } else if DAMPENERS.contains(&word) {
        -BOOSTER_INCREMENT
    } else {
        0.0
    }
}

fn is_negation(word: &str) -> bool {
    let compact: String = word.chars().filter(|c| *c != '\'').collect();
    NEGATIONS.contains(&compact.as_str()) || word.ends_with("n't")
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => QUESTION_CEILING,
    };
    exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn score(text: &str) -> f64 {
        LexiconScorer::builtin().polarity(text)
    }

    #[test]
    fn unknown_or_empty_text_is_zero() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   "), 0.0);
        assert_eq!(score("The work was delivered on Tuesday."), 0.0);
    }

    #[test]
    fn single_word_valence_is_normalized() {
        let expected = 3.1 / (3.1_f64 * 3.1 + 15.0).sqrt();
        assert!((score("Great communication, would hire again.") - expected).abs() < 1e-9);
    }

    #[test]
    fn negation_flips_polarity() {
        assert!(score("The work was good.") > 0.2);
        assert!(score("The work was not good.") < -0.2);
        assert!(score("The work wasn't good.") < -0.2);
    }

    #[test]
    fn boosters_and_dampeners_shift_intensity() {
        let plain = score("good work");
        assert!(score("very good work") > plain);
        assert!(score("slightly good work") < plain);
        assert!(score("very bad work") < score("bad work"));
    }

    #[test]
    fn contrastive_but_weights_the_second_clause() {
        assert!(score("Good start but terrible finish") < -0.2);
        assert!(score("Terrible start but great finish") > 0.2);
    }

    #[test]
    fn exclamations_and_caps_add_emphasis() {
        assert!(score("Great!!!") > score("Great"));
        assert!(score("GREAT work") > score("great work"));
        assert!(score("Awful!!") < score("Awful"));
    }

    #[test]
    fn compound_stays_in_range() {
        let text = "great great great amazing superb best best best!!!!";
        let value = score(text);
        assert!((-1.0..=1.0).contains(&value));
        assert!(value > 0.9);
    }

    #[test]
    fn loads_tab_separated_lexicon() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("lexicon.txt");
        fs::write(
            &path,
            "stellar\t3.0\t0.5\t[3, 3]\nbroken line\nmeh\t-0.5\t0.4\t[0, -1]\n",
        )
        .expect("lexicon should write");

        let scorer = LexiconScorer::from_file(&path).expect("lexicon should load");
        assert_eq!(scorer.entry_count(), 2);
        assert!(scorer.polarity("stellar delivery") > 0.5);
        assert_eq!(scorer.polarity("great delivery"), 0.0);
    }

    #[test]
    fn empty_lexicon_file_is_rejected() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("lexicon.txt");
        fs::write(&path, "no tabs here\n").expect("lexicon should write");
        assert!(LexiconScorer::from_file(&path).is_err());
    }
}
