//! Token Markup Model (spec.md §4.4): parses the tagged-token string a
//! tagger emits and reorders each token's fields into canonical order
//! before verbalization.

use std::collections::HashMap;

use crate::config::{Language, Operator};
use crate::error::{Result, WeTextError};

/// A single tagged token: a class name plus an ordered list of field
/// key/value pairs, as emitted between a tagger and a verbalizer.
#[derive(Debug, Clone)]
pub struct Token {
    pub name: String,
    pub order: Vec<String>,
    pub members: HashMap<String, String>,
}

impl Token {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            order: Vec::new(),
            members: HashMap::new(),
        }
    }

    pub fn append(&mut self, key: &str, value: &str) {
        self.order.push(key.to_string());
        self.members.insert(key.to_string(), value.to_string());
    }

    /// Render this token's fields in canonical order for `orders`, unless
    /// `preserve_order: "true"` is present, in which case the observed
    /// order is kept verbatim (spec.md §4.4).
    pub fn to_string_with_order(&self, orders: &HashMap<String, Vec<String>>) -> String {
        let mut output = format!("{} {{", self.name);

        let order = if self.members.get("preserve_order").map(String::as_str) == Some("true") {
            self.order.clone()
        } else if let Some(defined_order) = orders.get(&self.name) {
            let mut ordered: Vec<String> = defined_order
                .iter()
                .filter(|k| self.members.contains_key(*k))
                .cloned()
                .collect();
            for key in &self.order {
                if !ordered.contains(key) {
                    ordered.push(key.clone());
                }
            }
            ordered
        } else {
            self.order.clone()
        };

        for key in &order {
            if let Some(value) = self.members.get(key) {
                output.push_str(&format!(" {}: \"{}\"", key, value));
            }
        }

        output.push_str(" }");
        output
    }
}

/// Parses tagger output and reorders fields according to the canonical
/// per-(language, operator) order tables (spec.md §4.4).
pub struct TokenParser {
    orders: HashMap<String, Vec<String>>,
}

impl TokenParser {
    pub fn new(lang: Language, operator: Operator) -> Self {
        // Japanese uses the same canonical orders as Chinese (both read
        // native year/month/day and sign/numerator/denominator markup).
        // English ITN's date class reads month-day-year (spoken order) and
        // verbalizes year-month-day (ISO order), the same shape Chinese/
        // Japanese date ITN needs, so it shares `itn_orders` rather than
        // getting its own table.
        let orders = match (lang, operator) {
            (Language::En, Operator::Tn) => Self::en_tn_orders(),
            (Language::En | Language::Zh | Language::Ja, Operator::Itn) => Self::itn_orders(),
            (Language::Zh | Language::Ja, Operator::Tn) => Self::tn_orders(),
            _ => HashMap::new(),
        };

        Self { orders }
    }

    fn tn_orders() -> HashMap<String, Vec<String>> {
        let mut m = HashMap::new();
        m.insert("date".into(), strs(&["year", "month", "day"]));
        m.insert("fraction".into(), strs(&["denominator", "numerator"]));
        m.insert("measure".into(), strs(&["denominator", "numerator", "value"]));
        m.insert("money".into(), strs(&["value", "currency"]));
        m.insert("time".into(), strs(&["noon", "hour", "minute", "second"]));
        m
    }

    fn en_tn_orders() -> HashMap<String, Vec<String>> {
        let mut m = HashMap::new();
        // Spoken English favors month before day ("january fifth", not "fifth
        // january"); the tagger reads ISO dates year-first, so reordering
        // onto this canonical sequence is required before verbalizing.
        m.insert(
            "date".into(),
            strs(&["preserve_order", "text", "month", "day", "year"]),
        );
        m.insert(
            "money".into(),
            strs(&["integer_part", "fractional_part", "quantity", "currency_maj"]),
        );
        // Plain "value unit" measures already tag in this order; the rate
        // branch marks `preserve_order` itself since its own read order
        // (value, unit, unit2) matches its verbalized order too, so this
        // entry only matters for the rare case a future branch reads fields
        // out of order without opting into `preserve_order`.
        m.insert("measure".into(), strs(&["value", "unit", "unit2"]));
        m
    }

    fn itn_orders() -> HashMap<String, Vec<String>> {
        let mut m = HashMap::new();
        m.insert("date".into(), strs(&["year", "month", "day"]));
        m.insert("fraction".into(), strs(&["sign", "numerator", "denominator"]));
        m.insert("measure".into(), strs(&["numerator", "denominator", "value"]));
        m.insert("money".into(), strs(&["currency", "value", "decimal"]));
        m.insert("time".into(), strs(&["hour", "minute", "second", "noon"]));
        m
    }

    /// Reorder every token in `input`. Non-token text (no `{` present) and
    /// malformed input are returned unchanged, matching spec.md §7's "return
    /// the original input plus a diagnostic" policy for reorder failures —
    /// the fatal case (§7's "tagger produced it, so a parser failure
    /// indicates a grammar bug") is surfaced by `parse` returning `Err`.
    pub fn reorder(&self, input: &str) -> Result<String> {
        if input.trim().is_empty() {
            return Ok(String::new());
        }
        if !input.contains('{') {
            return Ok(input.to_string());
        }

        let tokens = self.parse(input)?;
        let output: Vec<String> = tokens
            .iter()
            .map(|t| t.to_string_with_order(&self.orders))
            .collect();
        Ok(output.join(" "))
    }

    /// Parse `name { key: "value" ... } name { ... } ...` into structured
    /// tokens (the grammar from spec.md §4.4).
    fn parse(&self, input: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let chars: Vec<char> = input.chars().collect();
        let mut index = 0;

        while index < chars.len() {
            while index < chars.len() && chars[index].is_whitespace() {
                index += 1;
            }
            if index >= chars.len() {
                break;
            }

            let name_start = index;
            while index < chars.len() && (chars[index].is_ascii_alphabetic() || chars[index] == '_') {
                index += 1;
            }
            let name: String = chars[name_start..index].iter().collect();
            if name.is_empty() {
                return Err(WeTextError::TokenParseError(format!(
                    "unexpected character '{}' at position {}",
                    chars[index], index
                )));
            }

            while index < chars.len() && (chars[index].is_whitespace() || chars[index] == '{') {
                index += 1;
            }

            let mut token = Token::new(&name);
            loop {
                while index < chars.len() && chars[index].is_whitespace() {
                    index += 1;
                }
                if index >= chars.len() || chars[index] == '}' {
                    if index < chars.len() {
                        index += 1;
                    }
                    break;
                }

                let key_start = index;
                while index < chars.len() && (chars[index].is_ascii_alphabetic() || chars[index] == '_') {
                    index += 1;
                }
                let key: String = chars[key_start..index].iter().collect();
                if key.is_empty() {
                    if index < chars.len() && chars[index] != '}' {
                        index += 1;
                    }
                    continue;
                }

                while index < chars.len() && (chars[index] == ':' || chars[index] == ' ') {
                    index += 1;
                }
                if index < chars.len() && chars[index] == '"' {
                    index += 1;
                }

                let mut value = String::new();
                let mut escape = false;
                while index < chars.len() && (escape || chars[index] != '"') {
                    if escape {
                        value.push(chars[index]);
                        escape = false;
                    } else if chars[index] == '\\' {
                        escape = true;
                        value.push(chars[index]);
                    } else {
                        value.push(chars[index]);
                    }
                    index += 1;
                }
                if index < chars.len() && chars[index] == '"' {
                    index += 1;
                }

                token.append(&key, &value);
            }

            tokens.push(token);
        }

        Ok(tokens)
    }
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
