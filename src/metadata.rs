//! Metadata synthesis for accepted elements.
//!
//! Literal attribute values and text content are pulled out of the element on
//! a best-effort basis: anything that is not a plain literal (or a template
//! literal, for text) is ignored, never an error.

use html_escape::decode_html_entities;
use oxc_ast::ast::*;
use serde::Serialize;

use crate::parse::SourceUnit;

// ═══════════════════════════════════════════════════════════════════════════════
// LITERAL VALUES
// ═══════════════════════════════════════════════════════════════════════════════

/// A literal value as it appears in source.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl LiteralValue {
    pub fn from_expression(expr: &Expression) -> Option<Self> {
        match expr.without_parentheses() {
            Expression::StringLiteral(s) => Some(LiteralValue::String(s.value.to_string())),
            Expression::NumericLiteral(n) => Some(LiteralValue::Number(n.value)),
            Expression::BooleanLiteral(b) => Some(LiteralValue::Bool(b.value)),
            Expression::NullLiteral(_) => Some(LiteralValue::Null),
            _ => None,
        }
    }

    /// Stringified the way JS `String(value)` does it.
    pub fn to_js_string(&self) -> String {
        match self {
            LiteralValue::String(s) => s.clone(),
            LiteralValue::Number(n) => js_number_to_string(*n),
            LiteralValue::Bool(b) => b.to_string(),
            LiteralValue::Null => "null".to_string(),
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            LiteralValue::String(s) => !s.is_empty(),
            LiteralValue::Number(n) => *n != 0.0 && !n.is_nan(),
            LiteralValue::Bool(b) => *b,
            LiteralValue::Null => false,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            LiteralValue::String(s) => serde_json::Value::String(s.clone()),
            LiteralValue::Number(n) => number_to_json(*n),
            LiteralValue::Bool(b) => serde_json::Value::Bool(*b),
            LiteralValue::Null => serde_json::Value::Null,
        }
    }
}

/// `Number.prototype.toString()` for radix 10.
fn js_number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n == f64::INFINITY {
        return "Infinity".to_string();
    }
    if n < 0.0 {
        return format!("-{}", js_number_to_string(-n));
    }

    // shortest round-trip digits, e.g. "1.2345e3"
    let sci = format!("{:e}", n);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return n.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return n.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let point = exponent + 1;

    if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, exponent.abs())
        }
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    // 2^53: integers past this are not exact in JS anyway
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ATTRIBUTE LITERALS
// ═══════════════════════════════════════════════════════════════════════════════

/// Literal-valued attributes of one element, in source order.
#[derive(Debug, Clone, Default)]
pub struct AttributeLiterals {
    entries: Vec<(String, LiteralValue)>,
}

impl AttributeLiterals {
    pub fn from_attributes(attributes: &[JSXAttributeItem]) -> Self {
        let mut entries = Vec::new();
        for item in attributes {
            let JSXAttributeItem::Attribute(attr) = item else {
                continue;
            };
            let JSXAttributeName::Identifier(name) = &attr.name else {
                continue;
            };
            let value = match &attr.value {
                Some(JSXAttributeValue::StringLiteral(s)) => Some(LiteralValue::String(
                    decode_html_entities(s.value.as_str()).into_owned(),
                )),
                Some(JSXAttributeValue::ExpressionContainer(container)) => container
                    .expression
                    .as_expression()
                    .and_then(LiteralValue::from_expression),
                _ => None,
            };
            if let Some(value) = value {
                entries.push((name.name.to_string(), value));
            }
        }
        Self { entries }
    }

    /// Last value written for `name`; a repeated attribute overrides earlier ones.
    pub fn get(&self, name: &str) -> Option<&LiteralValue> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEXT EXTRACTION
// ═══════════════════════════════════════════════════════════════════════════════

/// Text content of an element's children, nested elements included.
pub fn extract_text(children: &[JSXChild]) -> String {
    join_non_empty(children.iter().map(child_text)).trim().to_string()
}

fn child_text(child: &JSXChild) -> String {
    match child {
        JSXChild::Text(text) => decode_html_entities(text.value.as_str()).trim().to_string(),
        JSXChild::ExpressionContainer(container) => match container.expression.as_expression() {
            Some(expr) => expression_text(expr),
            None => String::new(),
        },
        JSXChild::Element(element) => join_non_empty(element.children.iter().map(child_text)),
        JSXChild::Fragment(_) | JSXChild::Spread(_) => String::new(),
    }
}

fn expression_text(expr: &Expression) -> String {
    if let Some(literal) = LiteralValue::from_expression(expr) {
        return literal.to_js_string();
    }
    match expr.without_parentheses() {
        Expression::TemplateLiteral(template) => template
            .quasis
            .iter()
            .map(|quasi| quasi.value.raw.as_str())
            .collect(),
        _ => String::new(),
    }
}

fn join_non_empty<I: Iterator<Item = String>>(parts: I) -> String {
    parts
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONTENT DIGEST
// ═══════════════════════════════════════════════════════════════════════════════

/// Content snapshot embedded as `data-component-content`. Field order is the
/// serialized key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDigest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<serde_json::Value>,
}

impl ContentDigest {
    pub fn assemble(text: String, literals: &AttributeLiterals) -> Self {
        let pick = |name: &str| {
            literals
                .get(name)
                .filter(|value| value.is_truthy())
                .map(LiteralValue::to_json)
        };
        Self {
            text: Some(text).filter(|t| !t.is_empty()),
            placeholder: pick("placeholder"),
            class_name: pick("className"),
            id: pick("id"),
            title: pick("title"),
            alt: pick("alt"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.placeholder.is_none()
            && self.class_name.is_none()
            && self.id.is_none()
            && self.title.is_none()
            && self.alt.is_none()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ELEMENT METADATA
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub struct ElementMetadata {
    /// `<relativePath>:<line>:<column>`
    pub id: String,
    pub name: String,
    pub path: String,
    pub line: u32,
    pub column: u32,
    pub file: String,
    pub content: ContentDigest,
}

impl ElementMetadata {
    /// Build the record for an element whose opening tag starts at `(line, column)`.
    pub fn synthesize(
        unit: &SourceUnit,
        name: String,
        line: u32,
        column: u32,
        opening: &JSXOpeningElement,
        children: &[JSXChild],
    ) -> Self {
        let literals = AttributeLiterals::from_attributes(&opening.attributes);
        let content = ContentDigest::assemble(extract_text(children), &literals);

        Self {
            id: format!("{}:{}:{}", unit.relative_path, line, column),
            name,
            path: unit.relative_path.clone(),
            line,
            column,
            file: unit.file_name.clone(),
            content,
        }
    }
}
