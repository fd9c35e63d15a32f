//! Path templates with positional `{placeholder}` substitution.

use std::fmt::Display;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::TemplateError;

/// Characters escaped in a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A request path such as `/comments/{commentID}`.
///
/// Placeholders are filled left to right from the parameters passed to
/// [`PathTemplate::resolve`]; their names only matter for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathTemplate<'a>(&'a str);

impl<'a> PathTemplate<'a> {
    pub fn new(template: &'a str) -> Self {
        Self(template)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Substitute every placeholder with the next parameter.
    ///
    /// Fails if a placeholder has no parameter, if parameters are left over,
    /// or if a `{` is never closed. Each parameter is percent-encoded as one
    /// path segment, so `?`, `#`, `/` and spaces cannot change the target.
    pub fn resolve(&self, params: &[&dyn Display]) -> Result<String, TemplateError> {
        let template = self.0;
        if template.is_empty() {
            return Err(TemplateError::Empty);
        }

        let mut resolved = String::with_capacity(template.len());
        let mut params = params.iter();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            resolved.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| TemplateError::Unterminated {
                template: template.to_string(),
            })?;
            let placeholder = &after[..close];
            let param = params.next().ok_or_else(|| TemplateError::MissingParam {
                template: template.to_string(),
                placeholder: placeholder.to_string(),
            })?;
            let param = param.to_string();
            resolved.extend(utf8_percent_encode(&param, PATH_SEGMENT));
            rest = &after[close + 1..];
        }
        resolved.push_str(rest);

        let unused = params.count();
        if unused > 0 {
            return Err(TemplateError::UnusedParams {
                template: template.to_string(),
                unused,
            });
        }
        Ok(resolved)
    }
}
