#![allow(clippy::empty_docs)]

use log::trace;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use serde_json::{Map, Number, Value};
use shared::error::WebConfError;
use shared::utils::JS_CONFIG_VAR;
use shared::{config_err, config_err_res};

#[derive(Parser)]
#[grammar_inline = r#"
WHITESPACE = _{ " " | "\t" | "\r" | "\n" }
COMMENT = _{ ("//" ~ (!NEWLINE ~ ANY)*) | ("/*" ~ (!"*/" ~ ANY)* ~ "*/") }
ident = @{ (ASCII_ALPHA | "_" | "$") ~ (ASCII_ALPHANUMERIC | "_" | "$")* }
keyword = @{ ("var" | "let" | "const") ~ (" " | "\t" | "\r" | "\n") }
binding = @{ ident ~ ("." ~ ident)* }
declaration = _{ keyword? ~ binding ~ "=" }
dq_inner = @{ ("\\" ~ ANY | !("\"" | "\\" | NEWLINE) ~ ANY)* }
sq_inner = @{ ("\\" ~ ANY | !("'" | "\\" | NEWLINE) ~ ANY)* }
string = ${ ("\"" ~ dq_inner ~ "\"") | ("'" ~ sq_inner ~ "'") }
number = @{ "-"? ~ ("0" | ASCII_NONZERO_DIGIT ~ ("_"? ~ ASCII_DIGIT)*) ~ ("." ~ ASCII_DIGIT+)? ~ (^"e" ~ ("+" | "-")? ~ ASCII_DIGIT+)? }
boolean = { "true" | "false" }
null = { "null" }
pair = { (ident | string) ~ ":" ~ value }
object = { "{" ~ (pair ~ ("," ~ pair)* ~ ","?)? ~ "}" }
array = { "[" ~ (value ~ ("," ~ value)* ~ ","?)? ~ "]" }
value = _{ object | array | string | number | boolean | null }
main = _{ SOI ~ declaration? ~ object ~ ";"? ~ EOI }
"#]
struct JsConfigParser;

fn unescape(raw: &str) -> Result<String, WebConfError> {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('b') => result.push('\u{8}'),
            Some('f') => result.push('\u{c}'),
            Some('0') => result.push('\0'),
            Some('u') => {
                let high = read_code_unit(&mut chars, raw)?;
                let code = if (0xD800..0xDC00).contains(&high) {
                    // utf-16 surrogate pair, the low half must follow as another escape
                    if chars.next() != Some('\\') || chars.next() != Some('u') {
                        return config_err_res!("Unpaired surrogate escape in string '{raw}'");
                    }
                    let low = read_code_unit(&mut chars, raw)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return config_err_res!("Unpaired surrogate escape in string '{raw}'");
                    }
                    0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    high
                };
                match char::from_u32(code) {
                    Some(ch) => result.push(ch),
                    None => return config_err_res!("Invalid unicode escape '\\u{code:04x}' in string '{raw}'"),
                }
            }
            Some(other) => result.push(other),
            None => return config_err_res!("Unterminated escape in string '{raw}'"),
        }
    }
    Ok(result)
}

fn read_code_unit(chars: &mut std::str::Chars<'_>, raw: &str) -> Result<u32, WebConfError> {
    let hex: String = chars.take(4).collect();
    match u32::from_str_radix(&hex, 16) {
        Ok(code) if hex.len() == 4 => Ok(code),
        _ => config_err_res!("Invalid unicode escape '\\u{hex}' in string '{raw}'"),
    }
}

fn string_value(pair: Pair<Rule>) -> Result<String, WebConfError> {
    // string -> dq_inner | sq_inner
    let raw = pair.into_inner().next().map_or("", |inner| inner.as_str());
    unescape(raw)
}

fn number_value(pair: &Pair<Rule>) -> Result<Value, WebConfError> {
    let text = pair.as_str().replace('_', "");
    if text.contains(['.', 'e', 'E']) {
        text.parse::<f64>().ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| config_err!("Invalid number '{text}'"))
    } else if text.starts_with('-') {
        text.parse::<i64>().map(Value::from).map_err(|err| config_err!("Invalid number '{text}': {err}"))
    } else {
        text.parse::<u64>().map(Value::from).map_err(|err| config_err!("Invalid number '{text}': {err}"))
    }
}

fn object_value(pair: Pair<Rule>) -> Result<Value, WebConfError> {
    let mut map = Map::new();
    for entry in pair.into_inner() {
        let (line, _) = entry.line_col();
        let mut inner = entry.into_inner();
        let (Some(key), Some(value)) = (inner.next(), inner.next()) else {
            return config_err_res!("Incomplete object entry at line {line}");
        };
        let key = match key.as_rule() {
            Rule::string => string_value(key)?,
            _ => key.as_str().to_string(),
        };
        if map.contains_key(&key) {
            return config_err_res!("Duplicate key '{key}' at line {line}");
        }
        map.insert(key, to_value(value)?);
    }
    Ok(Value::Object(map))
}

fn to_value(pair: Pair<Rule>) -> Result<Value, WebConfError> {
    match pair.as_rule() {
        Rule::object => object_value(pair),
        Rule::array => pair.into_inner().map(to_value).collect::<Result<Vec<Value>, _>>().map(Value::Array),
        Rule::string => string_value(pair).map(Value::String),
        Rule::number => number_value(&pair),
        Rule::boolean => Ok(Value::Bool(pair.as_str() == "true")),
        Rule::null => Ok(Value::Null),
        rule => config_err_res!("Unexpected token {rule:?}: {}", pair.as_str()),
    }
}

/// Parses the browser form of the client configuration, `var appConfig = {...};`.
///
/// Accepts `var`, `let`, `const`, plain or dotted assignments (`window.appConfig = `)
/// and a bare object literal. Keys may be unquoted, strings single or double quoted,
/// trailing commas and comments are allowed.
pub fn parse_js_config(content: &str) -> Result<Value, WebConfError> {
    let pairs = JsConfigParser::parse(Rule::main, content)
        .map_err(|err| config_err!("Failed to parse javascript config: {err}"))?;
    for pair in pairs {
        match pair.as_rule() {
            Rule::binding => {
                let name = pair.as_str();
                if name.rsplit('.').next() != Some(JS_CONFIG_VAR) {
                    trace!("Javascript config is assigned to '{name}' instead of '{JS_CONFIG_VAR}'");
                }
            }
            Rule::object => return object_value(pair),
            _ => {}
        }
    }
    config_err_res!("Javascript config contains no object literal")
}

/// Renders the browser form of the client configuration.
pub fn to_js_config<T: serde::Serialize>(value: &T) -> Result<String, WebConfError> {
    let json = serde_json::to_string_pretty(value).map_err(|err| config_err!("Failed to serialize config: {err}"))?;
    Ok(format!("var {JS_CONFIG_VAR} = {json};\n"))
}
