//! Printf-style template formatting
//!
//! Implements the subset of `sprintf` conversions the printer supports:
//! `%s`, `%d`, `%f`, `%x` and the literal `%%`, with optional `-`/`0` flags,
//! a field width and a precision (`%-8s`, `%05d`, `%.2f`).
//!
//! Arguments are consumed positionally. A template with more placeholders
//! than arguments is an error; surplus arguments are ignored here (they are
//! still forwarded to the log recorder by the caller).

use super::error::{PrinterError, Result};
use super::params::ParamValue;

/// Format `template` by substituting `params` positionally.
pub fn sprintf(template: &str, params: &[ParamValue]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next_arg = 0usize;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut left_align = false;
        let mut zero_pad = false;
        loop {
            match chars.peek() {
                Some('-') => {
                    left_align = true;
                    chars.next();
                }
                Some('0') => {
                    zero_pad = true;
                    chars.next();
                }
                _ => break,
            }
        }

        let mut width = 0usize;
        while let Some(d) = chars.peek().and_then(|ch| ch.to_digit(10)) {
            width = width * 10 + d as usize;
            chars.next();
        }

        let mut precision = None;
        if chars.peek() == Some(&'.') {
            chars.next();
            let mut p = 0usize;
            while let Some(d) = chars.peek().and_then(|ch| ch.to_digit(10)) {
                p = p * 10 + d as usize;
                chars.next();
            }
            precision = Some(p);
        }

        let conv = chars.next().ok_or(PrinterError::TruncatedDirective)?;
        if conv == '%' {
            out.push('%');
            continue;
        }

        let value = params
            .get(next_arg)
            .ok_or_else(|| PrinterError::missing_argument(next_arg, conv))?;

        let rendered = match conv {
            's' => {
                let s = value.to_string();
                match precision {
                    Some(p) => s.chars().take(p).collect(),
                    None => s,
                }
            }
            'd' => match value {
                ParamValue::Int(i) => i.to_string(),
                ParamValue::Bool(b) => i64::from(*b).to_string(),
                other => {
                    return Err(PrinterError::argument_type(next_arg, 'd', other.type_name()))
                }
            },
            'f' => {
                let f = match value {
                    ParamValue::Float(f) => *f,
                    ParamValue::Int(i) => *i as f64,
                    other => {
                        return Err(PrinterError::argument_type(next_arg, 'f', other.type_name()))
                    }
                };
                format!("{:.*}", precision.unwrap_or(6), f)
            }
            'x' => match value {
                ParamValue::Int(i) => format!("{:x}", i),
                other => {
                    return Err(PrinterError::argument_type(next_arg, 'x', other.type_name()))
                }
            },
            other => return Err(PrinterError::unknown_directive(other)),
        };
        next_arg += 1;

        out.push_str(&pad(rendered, width, left_align, zero_pad));
    }

    Ok(out)
}

/// Apply field width padding to a rendered argument.
fn pad(rendered: String, width: usize, left_align: bool, zero_pad: bool) -> String {
    let len = rendered.chars().count();
    if len >= width {
        return rendered;
    }
    let fill = width - len;
    if left_align {
        let mut s = rendered;
        s.extend(std::iter::repeat(' ').take(fill));
        s
    } else if zero_pad {
        // Zeros go between the sign and the digits
        let (sign, digits) = match rendered.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rendered.as_str()),
        };
        format!("{}{}{}", sign, "0".repeat(fill), digits)
    } else {
        format!("{}{}", " ".repeat(fill), rendered)
    }
}
