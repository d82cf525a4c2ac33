//! Paths — ordered segment lists addressing a location within a value.
//!
//! A path has no inherent relation to any particular value until it is
//! resolved against one (see [`pick`](crate::pick::pick)).

use std::fmt;

/// One step of a path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(k) => write!(f, "\"{k}\""),
            Segment::Index(i) => write!(f, "{i}"),
        }
    }
}

/// An ordered sequence of segments, split on dots for parsing.
///
/// For example, `"items.2.name"` becomes
/// `[Key("items"), Index(2), Key("name")]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The empty path, addressing a value itself.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments<I: IntoIterator<Item = Segment>>(segments: I) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Parse a dot-separated path string into segments.
    ///
    /// Digit-only segments address array positions; everything else is an
    /// object key. Use [`Path::from_segments`] when an object key happens to
    /// be all digits. An empty string parses as the empty path.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::new();
        }
        Self {
            segments: path
                .split('.')
                .map(|seg| match seg.parse::<usize>() {
                    Ok(index) => Segment::Index(index),
                    Err(_) => Segment::Key(seg.to_string()),
                })
                .collect(),
        }
    }

    /// Append an object-key step.
    pub fn key(mut self, name: impl Into<String>) -> Self {
        self.segments.push(Segment::Key(name.into()));
        self
    }

    /// Append an array-index step.
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(Segment::Index(index));
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for Path {
    /// Dotted form: `items.2.name`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match seg {
                Segment::Key(k) => f.write_str(k)?,
                Segment::Index(idx) => write!(f, "{idx}")?,
            }
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Path::parse(path)
    }
}
