//! # Result Nodes
//!
//! Every successful parser returns a [`Node`]: the matched text, the ordered
//! children produced by nested parsers, and an optional semantic value of the
//! grammar author's payload type `V`.

/// One node of the match tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<V> {
    /// Matched text. Usually a verbatim slice of the input; `Map` and
    /// `Merge` may rewrite it.
    pub token: String,
    pub children: Vec<Node<V>>,
    pub value: Option<V>,
    noise: bool,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self {
            token: String::new(),
            children: Vec::new(),
            value: None,
            noise: false,
        }
    }
}

impl<V> Node<V> {
    pub fn leaf(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    pub fn branch(token: impl Into<String>, children: Vec<Node<V>>) -> Self {
        Self {
            token: token.into(),
            children,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }

    pub fn child(&self, index: usize) -> Option<&Node<V>> {
        self.children.get(index)
    }

    /// True for filler matched by the noise parser of a `SignalSeq`.
    pub fn is_noise(&self) -> bool {
        self.noise
    }

    pub(crate) fn into_noise(mut self) -> Self {
        self.noise = true;
        self
    }

    /// Children that are not noise filler.
    pub fn signals(&self) -> impl Iterator<Item = &Node<V>> {
        self.children.iter().filter(|child| !child.noise)
    }

    /// Depth-first concatenation of the leaf tokens below this node.
    /// A node without children contributes its own token.
    pub fn flattened_token(&self) -> String {
        if self.children.is_empty() {
            return self.token.clone();
        }
        let mut out = String::with_capacity(self.token.len());
        self.collect_tokens(&mut out);
        out
    }

    fn collect_tokens(&self, out: &mut String) {
        if self.children.is_empty() {
            out.push_str(&self.token);
        } else {
            for child in &self.children {
                child.collect_tokens(out);
            }
        }
    }
}
