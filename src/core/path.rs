// Coding-path tracking for decode positions; rendered jq-style ($.key[0].inner).
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Location of one decode position inside the value tree. The root path is
/// empty; children are derived by copy so sibling positions never share a
/// mutable spine.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CodingPath {
    segments: Vec<Segment>,
}

impl CodingPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn child_key(&self, key: &str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(Segment::Key(key.to_string()));
        Self { segments }
    }

    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(Segment::Index(index));
        Self { segments }
    }
}

impl fmt::Display for CodingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CodingPath, Segment};

    #[test]
    fn root_renders_as_dollar() {
        assert_eq!(CodingPath::root().to_string(), "$");
        assert!(CodingPath::root().is_root());
    }

    #[test]
    fn child_derivation_renders_keys_and_indices() {
        let path = CodingPath::root().child_key("legs").child_index(2).child_key("route");
        assert_eq!(path.to_string(), "$.legs[2].route");
        assert_eq!(path.depth(), 3);
    }

    #[test]
    fn children_do_not_alias_the_parent() {
        let parent = CodingPath::root().child_key("a");
        let left = parent.child_index(0);
        let right = parent.child_index(1);
        assert_eq!(parent.segments().len(), 1);
        assert_eq!(left.segments().last(), Some(&Segment::Index(0)));
        assert_eq!(right.segments().last(), Some(&Segment::Index(1)));
    }
}
