use std::{fmt, io, str::FromStr};

use crate::core::{
    shared::{Color, Vector2, Vector3},
    triangle::{Material, VertexTex2},
};

#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("Invalid number {0:?}")]
    InvalidNumber(String),
    #[error("Invalid value {value:?} after {prefix:?}")]
    InvalidValue { prefix: &'static str, value: String },
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("Expected marker {expected:?}, found {found:?}")]
    MarkerMismatch { expected: &'static str, found: Option<String> },
    #[error("Missing value after {0:?}")]
    MissingValue(&'static str),
    #[error("Expected line prefix {expected:?}, found {found:?}")]
    PrefixMismatch { expected: &'static str, found: String },
    #[error("Unexpected end of stream, expected {0:?}")]
    UnexpectedEnd(&'static str),
}

/// Reads prefixed lines, skipping blank lines and `#` comments.
pub struct LineReader<R> {
    inner: R,
    line: String,
}

impl<R: io::BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, line: String::new() }
    }

    /// Advances to the next significant line and strips the expected prefix
    /// token from it. Returns the remainder of the line without leading whitespace.
    fn next_prefixed(&mut self, prefix: &'static str) -> Result<&str, Err> {
        loop {
            self.line.clear();
            if self.inner.read_line(&mut self.line)? == 0 {
                return Err(Err::UnexpectedEnd(prefix));
            }
            let trimmed = self.line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            break;
        }

        let trimmed = self.line.trim();
        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim_start()),
            None => (trimmed, ""),
        };
        if head != prefix {
            return Err(Err::PrefixMismatch { expected: prefix, found: head.to_string() });
        }
        Ok(rest)
    }

    /// Returns the whole remainder of the next line after `prefix`.
    pub fn read_line_string(&mut self, prefix: &'static str) -> Result<String, Err> {
        self.next_prefixed(prefix).map(str::to_string)
    }

    /// Returns the first token after `prefix`, or an empty string if there is none.
    pub fn read_line_token(&mut self, prefix: &'static str) -> Result<String, Err> {
        let rest = self.next_prefixed(prefix)?;
        Ok(rest.split_whitespace().next().unwrap_or("").to_string())
    }

    /// Parses the first token after `prefix`.
    pub fn read_line_value<T: FromStr>(&mut self, prefix: &'static str) -> Result<T, Err> {
        let rest = self.next_prefixed(prefix)?;
        let token = rest.split_whitespace().next().ok_or(Err::MissingValue(prefix))?;
        token.parse::<T>().map_err(|_| Err::InvalidValue { prefix, value: token.to_string() })
    }
}


/// Token cursor over one vertex or material line.
struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str) -> Self {
        Self { iter: line.split_whitespace() }
    }

    fn marker(&mut self, expected: &'static str) -> Result<(), Err> {
        match self.iter.next() {
            Some(t) if t == expected => Ok(()),
            found => Err(Err::MarkerMismatch { expected, found: found.map(str::to_string) }),
        }
    }

    fn float(&mut self, after: &'static str) -> Result<f32, Err> {
        let token = self.iter.next().ok_or(Err::MissingValue(after))?;
        token.parse::<f32>().map_err(|_| Err::InvalidNumber(token.to_string()))
    }

    fn floats<const N: usize>(&mut self, marker: &'static str) -> Result<[f32; N], Err> {
        self.marker(marker)?;
        let mut out = [0.0; N];
        for v in out.iter_mut() {
            *v = self.float(marker)?;
        }
        Ok(out)
    }
}

/// Parses `c x y z n x y z t1 u v t2 u v`.
pub fn parse_vertex_tex2(line: &str) -> Result<VertexTex2, Err> {
    let mut tokens = Tokens::new(line);
    let coord = Vector3::from(tokens.floats::<3>("c")?);
    let normal = Vector3::from(tokens.floats::<3>("n")?);
    let tex_coord = Vector2::from(tokens.floats::<2>("t1")?);
    let tex_coord2 = Vector2::from(tokens.floats::<2>("t2")?);
    Ok(VertexTex2 { coord, normal, tex_coord, tex_coord2 })
}

/// Parses `dif r g b a amb r g b a spc r g b a`.
pub fn parse_material(line: &str) -> Result<Material, Err> {
    let mut tokens = Tokens::new(line);
    let diffuse = Color::from(tokens.floats::<4>("dif")?);
    let ambient = Color::from(tokens.floats::<4>("amb")?);
    let specular = Color::from(tokens.floats::<4>("spc")?);
    Ok(Material { diffuse, ambient, specular })
}

fn write_floats<W: fmt::Write>(out: &mut W, marker: &str, values: &[f32]) -> fmt::Result {
    write!(out, "{}", marker)?;
    for v in values {
        write!(out, " {}", v)?;
    }
    Ok(())
}

pub fn write_vertex_tex2<W: fmt::Write>(out: &mut W, v: &VertexTex2) -> fmt::Result {
    write_floats(out, "c", v.coord.as_slice())?;
    write_floats(out, " n", v.normal.as_slice())?;
    write_floats(out, " t1", v.tex_coord.as_slice())?;
    write_floats(out, " t2", v.tex_coord2.as_slice())
}

pub fn write_material<W: fmt::Write>(out: &mut W, m: &Material) -> fmt::Result {
    write_floats(out, "dif", m.diffuse.as_slice())?;
    write_floats(out, " amb", m.ambient.as_slice())?;
    write_floats(out, " spc", m.specular.as_slice())
}
