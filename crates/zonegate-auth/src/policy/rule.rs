//! Individual credential rules and their compilation from a policy.

use zonegate_core::types::policy::ComplexityRules;

/// Character classes a rule can require a minimum count of.
///
/// Letter and digit classes follow the Unicode properties, so `É` counts as
/// uppercase. Anything that is neither alphanumeric nor whitespace is special.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    /// Punctuation and symbols such as `!`, `#`, `@`, `€`.
    Special,
}

impl CharacterClass {
    /// Whether `c` belongs to this class.
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Uppercase => c.is_uppercase(),
            Self::Lowercase => c.is_lowercase(),
            Self::Digit => c.is_numeric(),
            Self::Special => !c.is_alphanumeric() && !c.is_whitespace(),
        }
    }

    /// Name used in violation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Digit => "digit",
            Self::Special => "special",
        }
    }

    fn count(self, candidate: &str) -> usize {
        candidate.chars().filter(|&c| self.matches(c)).count()
    }
}

/// Character-class rules in evaluation order, each with the policy field
/// that controls it.
const CHARACTER_RULES: [(CharacterClass, fn(&ComplexityRules) -> i32); 4] = [
    (CharacterClass::Uppercase, upper_threshold),
    (CharacterClass::Lowercase, lower_threshold),
    (CharacterClass::Digit, digit_threshold),
    (CharacterClass::Special, special_threshold),
];

fn upper_threshold(r: &ComplexityRules) -> i32 {
    r.require_upper_case_character
}

fn lower_threshold(r: &ComplexityRules) -> i32 {
    r.require_lower_case_character
}

fn digit_threshold(r: &ComplexityRules) -> i32 {
    r.require_digit
}

fn special_threshold(r: &ComplexityRules) -> i32 {
    r.require_special_character
}

/// One testable constraint over a credential string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyRule {
    /// Length in characters must lie within `min..=max`.
    Length {
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
    },
    /// At least `required` characters of `class`.
    Characters {
        /// The class being counted.
        class: CharacterClass,
        /// Minimum count.
        required: usize,
    },
}

impl PolicyRule {
    /// Compile the active rules of a policy, in the order length, uppercase,
    /// lowercase, digit, special.
    ///
    /// The length rule is active iff `min_length >= 0 && max_length > 0`;
    /// each class rule is active iff its threshold is `> 0`. Inactive
    /// thresholds produce no rule.
    pub fn compile(rules: &ComplexityRules) -> Vec<PolicyRule> {
        let mut compiled = Vec::with_capacity(1 + CHARACTER_RULES.len());

        if rules.min_length >= 0 && rules.max_length > 0 {
            compiled.push(PolicyRule::Length {
                min: rules.min_length as usize,
                max: rules.max_length as usize,
            });
        }

        for (class, threshold) in CHARACTER_RULES {
            let required = threshold(rules);
            if required > 0 {
                compiled.push(PolicyRule::Characters {
                    class,
                    required: required as usize,
                });
            }
        }

        compiled
    }

    /// Evaluate the rule, returning a violation message on failure.
    ///
    /// `subject` is the noun that starts the message, e.g. `"Client secret"`.
    pub fn check(&self, subject: &str, candidate: &str) -> Option<String> {
        match *self {
            PolicyRule::Length { min, max } => {
                let length = candidate.chars().count();
                if length < min {
                    Some(format!(
                        "{subject} must be at least {min} characters in length."
                    ))
                } else if length > max {
                    Some(format!(
                        "{subject} must be no more than {max} characters in length."
                    ))
                } else {
                    None
                }
            }
            PolicyRule::Characters { class, required } => {
                if class.count(candidate) < required {
                    Some(format!(
                        "{subject} must contain at least {required} {} characters.",
                        class.label()
                    ))
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(min: i32, max: i32, upper: i32, lower: i32, digit: i32, special: i32) -> ComplexityRules {
        ComplexityRules::new(min, max, upper, lower, digit, special)
    }

    #[test]
    fn test_inactive_thresholds_compile_to_nothing() {
        assert!(PolicyRule::compile(&rules(0, 0, 0, 0, 0, 0)).is_empty());
        assert!(PolicyRule::compile(&rules(-1, 255, -1, -1, -1, -1)).is_empty());
        assert!(PolicyRule::compile(&ComplexityRules::unconfigured()).is_empty());
    }

    #[test]
    fn test_length_rule_activation() {
        assert_eq!(
            PolicyRule::compile(&rules(0, 255, 0, 0, 0, 0)),
            vec![PolicyRule::Length { min: 0, max: 255 }]
        );
        assert!(PolicyRule::compile(&rules(8, 0, 0, 0, 0, 0)).is_empty());
    }

    #[test]
    fn test_each_class_threshold_of_one_adds_one_rule_naming_the_class() {
        let cases = [
            (rules(0, 0, 1, 0, 0, 0), CharacterClass::Uppercase),
            (rules(0, 0, 0, 1, 0, 0), CharacterClass::Lowercase),
            (rules(0, 0, 0, 0, 1, 0), CharacterClass::Digit),
            (rules(0, 0, 0, 0, 0, 1), CharacterClass::Special),
        ];

        for (policy, class) in cases {
            let compiled = PolicyRule::compile(&policy);
            assert_eq!(compiled, vec![PolicyRule::Characters { class, required: 1 }]);

            let message = compiled[0].check("Client secret", "").unwrap();
            assert!(message.contains(class.label()), "{message}");
        }
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let compiled = PolicyRule::compile(&rules(1, 10, 1, 1, 1, 1));
        let order: Vec<_> = compiled
            .iter()
            .map(|r| match r {
                PolicyRule::Length { .. } => "length",
                PolicyRule::Characters { class, .. } => class.label(),
            })
            .collect();
        assert_eq!(order, ["length", "uppercase", "lowercase", "digit", "special"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let rule = PolicyRule::Length { min: 3, max: 3 };
        assert_eq!(rule.check("Password", "äöü"), None);
    }

    #[test]
    fn test_length_messages() {
        let rule = PolicyRule::Length { min: 4, max: 6 };
        assert_eq!(
            rule.check("Password", "abc").as_deref(),
            Some("Password must be at least 4 characters in length.")
        );
        assert_eq!(
            rule.check("Password", "abcdefg").as_deref(),
            Some("Password must be no more than 6 characters in length.")
        );
        assert_eq!(rule.check("Password", "abcd"), None);
    }

    #[test]
    fn test_character_classes() {
        assert!(CharacterClass::Special.matches('!'));
        assert!(CharacterClass::Special.matches('@'));
        assert!(!CharacterClass::Special.matches('a'));
        assert!(!CharacterClass::Special.matches(' '));
        assert!(CharacterClass::Digit.matches('7'));
        assert!(!CharacterClass::Uppercase.matches('a'));
        assert!(CharacterClass::Lowercase.matches('a'));
    }

    #[test]
    fn test_character_classes_are_unicode_aware() {
        assert!(CharacterClass::Uppercase.matches('É'));
        assert!(CharacterClass::Lowercase.matches('ß'));
        assert!(CharacterClass::Digit.matches('٣'));
        assert!(CharacterClass::Special.matches('€'));
        assert!(!CharacterClass::Special.matches('é'));
        assert!(!CharacterClass::Special.matches('\u{3000}'));

        let upper = PolicyRule::Characters {
            class: CharacterClass::Uppercase,
            required: 2,
        };
        assert_eq!(upper.check("Client secret", "ÉÀbc"), None);
    }
}
