//! Inflection helpers for module name derivation
//!
//! Every derived name goes through one word split: `Inflector` breaks the
//! input into lowercase `snake_case` words, a trailing number stays attached
//! to the word before it (`Invoice2` is the single word `invoice2`), and each
//! casing is rebuilt from those words. Class names and namespaces therefore
//! always agree (`HTTPRequest` is `HttpRequest` and `http_request`).
//!
//! Singular and plural forms only touch the last word, always in lowercase.
//! A short table of irregular nouns is consulted before `Inflector`.

use inflector::Inflector;

/// `(singular, plural)` pairs `Inflector` does not get right
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("ox", "oxen"),
];

/// Naming helpers shared by the generator and the route loader
pub struct NameHelpers;

impl NameHelpers {
    /// Lowercase words of `input`
    fn words(input: &str) -> Vec<String> {
        let mut words: Vec<String> = Vec::new();
        for word in input.to_snake_case().split('_').filter(|w| !w.is_empty()) {
            match words.last_mut() {
                Some(prev) if word.chars().all(|c| c.is_ascii_digit()) => prev.push_str(word),
                _ => words.push(word.to_string()),
            }
        }
        words
    }

    fn capitalize(word: &str) -> String {
        let mut chars = word.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    fn inflect_last(input: &str, inflect: fn(&str) -> String) -> String {
        let mut words = Self::words(input);
        if let Some(last) = words.last_mut() {
            *last = inflect(last);
        }
        words.join("_")
    }

    fn plural_word(word: &str) -> String {
        for (singular, plural) in IRREGULAR {
            if word == *singular || word == *plural {
                return (*plural).to_string();
            }
        }
        word.to_plural()
    }

    fn singular_word(word: &str) -> String {
        for (singular, plural) in IRREGULAR {
            if word == *singular || word == *plural {
                return (*singular).to_string();
            }
        }
        word.to_singular()
    }

    /// Convert string to `snake_case`
    ///
    /// ```
    /// # use modforge::naming::NameHelpers;
    /// assert_eq!(NameHelpers::to_snake_case("UserProfile"), "user_profile");
    /// assert_eq!(NameHelpers::to_snake_case("HTTPRequest"), "http_request");
    /// assert_eq!(NameHelpers::to_snake_case("Invoice2"), "invoice2");
    /// ```
    #[must_use]
    pub fn to_snake_case(input: &str) -> String {
        Self::words(input).join("_")
    }

    /// Convert string to `PascalCase`
    ///
    /// ```
    /// # use modforge::naming::NameHelpers;
    /// assert_eq!(NameHelpers::to_pascal_case("user_profile"), "UserProfile");
    /// assert_eq!(NameHelpers::to_pascal_case("HTTPRequest"), "HttpRequest");
    /// ```
    #[must_use]
    pub fn to_pascal_case(input: &str) -> String {
        Self::words(input)
            .iter()
            .map(|w| Self::capitalize(w))
            .collect()
    }

    /// Convert string to camelCase
    #[must_use]
    pub fn to_camel_case(input: &str) -> String {
        let words = Self::words(input);
        let mut out = String::new();
        for (i, word) in words.iter().enumerate() {
            if i == 0 {
                out.push_str(word);
            } else {
                out.push_str(&Self::capitalize(word));
            }
        }
        out
    }

    /// Convert string to kebab-case
    #[must_use]
    pub fn to_kebab_case(input: &str) -> String {
        Self::words(input).join("-")
    }

    /// Plural of the last word, as `snake_case`
    ///
    /// Words that are already plural are left alone.
    ///
    /// ```
    /// # use modforge::naming::NameHelpers;
    /// assert_eq!(NameHelpers::pluralize("InvoiceItem"), "invoice_items");
    /// assert_eq!(NameHelpers::pluralize("SalesPerson"), "sales_people");
    /// ```
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        Self::inflect_last(input, Self::plural_word)
    }

    /// Singular of the last word, as `snake_case`
    ///
    /// Words that are already singular are left alone, including those
    /// ending in `s` such as `status` or `analysis`.
    ///
    /// ```
    /// # use modforge::naming::NameHelpers;
    /// assert_eq!(NameHelpers::singularize("posts"), "post");
    /// assert_eq!(NameHelpers::singularize("Status"), "status");
    /// ```
    #[must_use]
    pub fn singularize(input: &str) -> String {
        Self::inflect_last(input, Self::singular_word)
    }

    /// Table name for a model (`snake_case` plural)
    #[must_use]
    pub fn to_table_name(model: &str) -> String {
        Self::pluralize(model)
    }

    /// Route prefix for a model (kebab-case plural, no leading slash)
    ///
    /// ```
    /// # use modforge::naming::NameHelpers;
    /// assert_eq!(NameHelpers::to_route_prefix("UserProfile"), "user-profiles");
    /// ```
    #[must_use]
    pub fn to_route_prefix(model: &str) -> String {
        Self::to_kebab_case(&Self::pluralize(model))
    }

    /// Human-readable title
    #[must_use]
    pub fn to_title(model: &str) -> String {
        Self::words(model)
            .iter()
            .map(|w| Self::capitalize(w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
