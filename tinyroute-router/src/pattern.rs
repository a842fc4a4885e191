use std::fmt;

use http::Method;

use crate::{Params, TemplateError};

/// A compiled `(method, path template)` pair.
///
/// Templates are split on `/` into segments. Each segment is literal text,
/// `{name}` placeholders, or a mix of both (`{name}.txt`). A placeholder
/// matches one or more characters other than `/`.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    method: Method,
    template: String,
    segments: Vec<Segment>,
    names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct Segment {
    parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq)]
enum Part {
    Literal(String),
    Param,
}

impl RoutePattern {
    /// Compile a pattern from a method and a template like "/users/{id}/posts".
    pub fn compile(method: &str, template: &str) -> Result<Self, TemplateError> {
        let method = normalize_method(method)?;

        if !template.starts_with('/') {
            return Err(TemplateError::MissingLeadingSlash {
                template: template.to_string(),
            });
        }

        let mut names = Vec::new();
        let mut segments = Vec::new();
        let mut offset = 0;

        for raw in template.split('/') {
            segments.push(parse_segment(template, raw, offset, &mut names)?);
            offset += raw.len() + 1;
        }

        Ok(RoutePattern {
            method,
            template: template.to_string(),
            segments,
            names,
        })
    }

    /// Match an upper-cased method and a request path, extracting parameters.
    pub fn matches(&self, method: &str, path: &str) -> Option<Params> {
        if self.method.as_str() != method {
            return None;
        }

        let mut path_segments = path.split('/');
        let mut captures = Vec::with_capacity(self.names.len());

        for segment in &self.segments {
            let text = path_segments.next()?;
            if !match_segment(&segment.parts, text, &mut captures) {
                return None;
            }
        }

        if path_segments.next().is_some() {
            return None;
        }

        let mut params = Params::new();
        for (name, value) in self.names.iter().zip(captures) {
            params.insert(name.as_str(), value);
        }

        Some(params)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Placeholder names in the order they appear in the template.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn has_params(&self) -> bool {
        !self.names.is_empty()
    }

    /// True when both patterns accept exactly the same requests, whatever
    /// their placeholders are called.
    pub fn same_shape(&self, other: &RoutePattern) -> bool {
        self.method == other.method && self.segments == other.segments
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.template)
    }
}

pub(crate) fn normalize_method(method: &str) -> Result<Method, TemplateError> {
    Method::from_bytes(method.to_ascii_uppercase().as_bytes()).map_err(|_| {
        TemplateError::InvalidMethod {
            method: method.to_string(),
        }
    })
}

fn parse_segment(
    template: &str,
    raw: &str,
    offset: usize,
    names: &mut Vec<String>,
) -> Result<Segment, TemplateError> {
    let mut parts = Vec::new();
    let mut rest = raw;
    let mut position = offset;

    while !rest.is_empty() {
        if let Some(after_open) = rest.strip_prefix('{') {
            let close = after_open
                .find('}')
                .ok_or_else(|| TemplateError::UnclosedBrace {
                    template: template.to_string(),
                    position,
                })?;

            let name = &after_open[..close];
            if !is_valid_name(name) {
                return Err(TemplateError::InvalidParamName {
                    template: template.to_string(),
                    name: name.to_string(),
                });
            }
            if names.iter().any(|n| n == name) {
                return Err(TemplateError::DuplicateParam {
                    template: template.to_string(),
                    name: name.to_string(),
                });
            }

            if parts.last() == Some(&Part::Param) {
                return Err(TemplateError::AdjacentParams {
                    template: template.to_string(),
                    position,
                });
            }

            names.push(name.to_string());
            parts.push(Part::Param);

            // "{" + name + "}"
            let consumed = close + 2;
            rest = &rest[consumed..];
            position += consumed;
        } else {
            let end = rest.find(['{', '}']).unwrap_or(rest.len());
            if end == 0 {
                return Err(TemplateError::UnexpectedClosingBrace {
                    template: template.to_string(),
                    position,
                });
            }

            parts.push(Part::Literal(rest[..end].to_string()));
            rest = &rest[end..];
            position += end;
        }
    }

    Ok(Segment { parts })
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Match one path segment against its parts, pushing placeholder captures
/// in order. Placeholders take the longest text that still lets the rest
/// of the segment match.
///
/// Runs in time linear in the segment length per part: a table of which
/// suffixes of `text` each tail of `parts` can match is filled right to
/// left, then captures are read off it left to right.
fn match_segment<'t>(parts: &[Part], text: &'t str, captures: &mut Vec<&'t str>) -> bool {
    match parts {
        [] => return text.is_empty(),
        [Part::Literal(literal)] => return text == literal.as_str(),
        _ => {}
    }

    let len = text.len();
    let width = len + 1;

    // feasible[p * width + offset]: parts[p..] matches text[offset..]
    let mut feasible = vec![false; (parts.len() + 1) * width];
    feasible[parts.len() * width + len] = true;

    for (p, part) in parts.iter().enumerate().rev() {
        let (row, next) = (p * width, (p + 1) * width);

        match part {
            Part::Literal(literal) => {
                for offset in 0..width {
                    if matches!(text.get(offset..), Some(rest) if rest.starts_with(literal.as_str()))
                    {
                        feasible[row + offset] = feasible[next + offset + literal.len()];
                    }
                }
            }
            Part::Param => {
                let mut later = false;
                for offset in (0..width).rev() {
                    if text.is_char_boundary(offset) {
                        feasible[row + offset] = later;
                        later |= feasible[next + offset];
                    }
                }
            }
        }
    }

    if !feasible[0] {
        return false;
    }

    let mut offset = 0;
    for (p, part) in parts.iter().enumerate() {
        let next = (p + 1) * width;

        match part {
            Part::Literal(literal) => offset += literal.len(),
            Part::Param => {
                let end = match (offset + 1..width).rev().find(|&end| feasible[next + end]) {
                    Some(end) => end,
                    None => return false,
                };
                captures.push(&text[offset..end]);
                offset = end;
            }
        }
    }

    true
}
