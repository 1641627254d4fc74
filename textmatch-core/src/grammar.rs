//! Grammar arena: primitives and combinators.
//!
//! Nodes live in a `Vec` owned by the [`Grammar`] and refer to their children by
//! [`NodeId`]. A node can only reference nodes that existed when it was added,
//! so every grammar is acyclic and evaluation always terminates.
//!
//! # Example
//!
//! ```
//! use textmatch_core::{Grammar, MatchFlags, NPOS};
//!
//! let mut g = Grammar::new();
//! let word = g.string_branch(&["apple", "orange", "this"]);
//! let space = g.space();
//! let rule = g.branch([word, space]);
//!
//! let m = g.matches(rule, "This is a test.", 0, NPOS, MatchFlags::CASE_INSENSITIVE).unwrap();
//! assert_eq!((m.span.start, m.span.end), (0, 4));
//! ```

use crate::classify::{Classifier, DefaultClassifier};
use crate::matcher::{Match, MatchFlags, Recognizer};
use crate::sgml;
use crate::source::{is_line_break, Source};
use crate::span::Span;

// ============================================================================
// Core Types
// ============================================================================

/// Index into a grammar's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Panics past `u32::MAX` nodes.
    fn new(index: usize) -> Self {
        NodeId(u32::try_from(index).expect("grammar node arena is full"))
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A matcher node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Always matches, zero width.
    Noop,

    /// Any single character.
    Any,

    /// One character, given as its decoded scalars.
    Char { chars: Vec<char>, invert: bool },

    /// One character out of a set. Records the member index as `hit_offset`.
    Set { members: Vec<char>, invert: bool },

    /// Whitespace. CR and LF only with [`MatchFlags::MULTILINE`].
    Space { invert: bool },

    /// Punctuation.
    Punct { invert: bool },

    /// Whitespace or punctuation.
    SpaceOrPunct { invert: bool },

    /// Start of line, zero width.
    Bol { invert: bool },

    /// End of line, zero width.
    Eol { invert: bool },

    /// Exact string.
    Literal(Vec<char>),

    /// Children in order, each starting where the previous ended.
    Sequence(Vec<NodeId>),

    /// First child that matches.
    Branch(Vec<NodeId>),

    /// Every child once, in any order. Greedy first fit, no backtracking.
    Permutation(Vec<NodeId>),

    /// `child` repeated `min..=max` times.
    Iterations { child: NodeId, min: usize, max: usize, greedy: bool },
}

/// Arena of matcher nodes sharing one classifier.
#[derive(Debug, Clone, Default)]
pub struct Grammar<C = DefaultClassifier> {
    nodes: Vec<Node>,
    classifier: C,
}

impl Grammar<DefaultClassifier> {
    /// Empty grammar with Unicode classification rules.
    pub fn new() -> Self {
        Self::with_classifier(DefaultClassifier)
    }
}

impl<C: Classifier> Grammar<C> {
    pub fn with_classifier(classifier: C) -> Self {
        Self { nodes: Vec::new(), classifier }
    }

    #[inline]
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Append a node. Child ids must come from this grammar.
    ///
    /// # Panics
    ///
    /// When the grammar already holds `u32::MAX + 1` nodes.
    pub fn add(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Borrow a node as a [`Recognizer`].
    #[inline]
    pub fn rule(&self, id: NodeId) -> Rule<'_, C> {
        Rule { grammar: self, id }
    }

    // ------------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------------

    pub fn noop(&mut self) -> NodeId {
        self.add(Node::Noop)
    }

    pub fn any(&mut self) -> NodeId {
        self.add(Node::Any)
    }

    pub fn char(&mut self, c: char) -> NodeId {
        self.add(Node::Char { chars: vec![c], invert: false })
    }

    /// One character spelled in SGML, e.g. `"&Zcaron;"`.
    pub fn sgml_char(&mut self, text: &str) -> NodeId {
        let chars = sgml::decode(text).chars().collect();
        self.add(Node::Char { chars, invert: false })
    }

    pub fn set(&mut self, members: &str) -> NodeId {
        self.add(Node::Set { members: members.chars().collect(), invert: false })
    }

    /// Character set spelled in SGML.
    pub fn sgml_set(&mut self, members: &str) -> NodeId {
        let members = sgml::decode(members).chars().collect();
        self.add(Node::Set { members, invert: false })
    }

    pub fn space(&mut self) -> NodeId {
        self.add(Node::Space { invert: false })
    }

    pub fn punct(&mut self) -> NodeId {
        self.add(Node::Punct { invert: false })
    }

    pub fn space_or_punct(&mut self) -> NodeId {
        self.add(Node::SpaceOrPunct { invert: false })
    }

    pub fn bol(&mut self) -> NodeId {
        self.add(Node::Bol { invert: false })
    }

    pub fn eol(&mut self) -> NodeId {
        self.add(Node::Eol { invert: false })
    }

    pub fn literal(&mut self, text: &str) -> NodeId {
        self.add(Node::Literal(text.chars().collect()))
    }

    /// String spelled in SGML, e.g. `"Ko&Zcaron;u"`.
    pub fn sgml_literal(&mut self, text: &str) -> NodeId {
        self.add(Node::Literal(sgml::decode(text).chars().collect()))
    }

    pub fn sequence(&mut self, children: impl IntoIterator<Item = NodeId>) -> NodeId {
        self.add(Node::Sequence(children.into_iter().collect()))
    }

    pub fn branch(&mut self, children: impl IntoIterator<Item = NodeId>) -> NodeId {
        self.add(Node::Branch(children.into_iter().collect()))
    }

    pub fn permutation(&mut self, children: impl IntoIterator<Item = NodeId>) -> NodeId {
        self.add(Node::Permutation(children.into_iter().collect()))
    }

    /// Greedy repetition, `min..=max` times. Pass `usize::MAX` for no upper bound.
    pub fn iterations(&mut self, child: NodeId, min: usize, max: usize) -> NodeId {
        self.add(Node::Iterations { child, min, max, greedy: true })
    }

    /// Repetition that stops as soon as `min` repetitions matched.
    pub fn lazy_iterations(&mut self, child: NodeId, min: usize, max: usize) -> NodeId {
        self.add(Node::Iterations { child, min, max, greedy: false })
    }

    /// Branch of literal strings; `hit_offset` is the index of the matching string.
    pub fn string_branch(&mut self, alternatives: &[&str]) -> NodeId {
        let children: Vec<NodeId> = alternatives.iter().map(|s| self.literal(s)).collect();
        self.branch(children)
    }

    /// Branch of SGML-spelled literal strings.
    pub fn sgml_string_branch(&mut self, alternatives: &[&str]) -> NodeId {
        let children: Vec<NodeId> = alternatives.iter().map(|s| self.sgml_literal(s)).collect();
        self.branch(children)
    }

    /// Add an inverted copy of a leaf node. `None` for nodes without an
    /// inverse (noop, any, literals, combinators).
    pub fn invert(&mut self, id: NodeId) -> Option<NodeId> {
        let node = match self.node(id)?.clone() {
            Node::Char { chars, invert } => Node::Char { chars, invert: !invert },
            Node::Set { members, invert } => Node::Set { members, invert: !invert },
            Node::Space { invert } => Node::Space { invert: !invert },
            Node::Punct { invert } => Node::Punct { invert: !invert },
            Node::SpaceOrPunct { invert } => Node::SpaceOrPunct { invert: !invert },
            Node::Bol { invert } => Node::Bol { invert: !invert },
            Node::Eol { invert } => Node::Eol { invert: !invert },
            _ => return None,
        };
        Some(self.add(node))
    }

    // ------------------------------------------------------------------------
    // Matching
    // ------------------------------------------------------------------------

    /// Match node `id` at `start`. `end` may be [`NPOS`](crate::span::NPOS).
    pub fn matches<S: Source + ?Sized>(
        &self,
        id: NodeId,
        src: &S,
        start: usize,
        end: usize,
        flags: MatchFlags,
    ) -> Option<Match> {
        let end = src.limit(end);
        if start > end {
            return None;
        }
        self.eval(id, src, start, end, flags)
    }

    fn eval<S: Source + ?Sized>(
        &self,
        id: NodeId,
        src: &S,
        start: usize,
        end: usize,
        flags: MatchFlags,
    ) -> Option<Match> {
        let ci = flags.case_insensitive();
        match self.node(id)? {
            Node::Noop => Some(Match::leaf(start, start)),

            Node::Any => {
                let g = src.glyph(start, end)?;
                Some(Match::leaf(start, start + g.width))
            }

            Node::Char { chars, invert } => {
                let g = src.glyph(start, end)?;
                (self.same(g.chars(), chars, ci) != *invert).then(|| Match::leaf(start, start + g.width))
            }

            Node::Set { members, invert } => {
                let g = src.glyph(start, end)?;
                match (self.position(members, g.chars(), ci), invert) {
                    (Some(hit), false) => Some(Match::hit(start, start + g.width, hit)),
                    (None, true) => Some(Match::leaf(start, start + g.width)),
                    _ => None,
                }
            }

            Node::Space { invert } => self.class(src, start, end, *invert, |c| self.is_space(c, flags)),

            Node::Punct { invert } => self.class(src, start, end, *invert, |c| self.classifier.is_punct(c)),

            Node::SpaceOrPunct { invert } => self.class(src, start, end, *invert, |c| {
                self.is_space(c, flags) || self.classifier.is_punct(c)
            }),

            Node::Bol { invert } => {
                let at = start == 0 || (start <= src.len() && is_line_break(src.unit(start - 1)));
                (at != *invert).then(|| Match::leaf(start, start))
            }

            Node::Eol { invert } => {
                let at = src.at_end(start, end) || is_line_break(src.unit(start));
                (at != *invert).then(|| Match::leaf(start, start))
            }

            Node::Literal(pattern) => {
                let mut pos = start;
                let mut i = 0;
                while i < pattern.len() {
                    let g = src.glyph(pos, end)?;
                    let n = g.chars().len();
                    if i + n > pattern.len() || !self.same(g.chars(), &pattern[i..i + n], ci) {
                        return None;
                    }
                    i += n;
                    pos += g.width;
                }
                Some(Match::leaf(start, pos))
            }

            Node::Sequence(children) => {
                let mut pos = start;
                let mut matched = Vec::with_capacity(children.len());
                for &child in children {
                    let m = self.child(id, child, src, pos, end, flags)?;
                    pos = m.span.end;
                    matched.push(m);
                }
                Some(Match { span: Span::new(start, pos), hit_offset: None, children: matched })
            }

            Node::Branch(children) => children.iter().enumerate().find_map(|(i, &child)| {
                self.child(id, child, src, start, end, flags).map(|m| Match {
                    span: Span::new(start, m.span.end),
                    hit_offset: Some(i),
                    children: vec![m],
                })
            }),

            Node::Permutation(children) => {
                let mut slots: Vec<Option<Match>> = vec![None; children.len()];
                let mut pos = start;
                for _ in 0..children.len() {
                    let (i, m) = children
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| slots[*i].is_none())
                        .find_map(|(i, &child)| self.child(id, child, src, pos, end, flags).map(|m| (i, m)))?;
                    pos = m.span.end;
                    slots[i] = Some(m);
                }
                Some(Match {
                    span: Span::new(start, pos),
                    hit_offset: None,
                    children: slots.into_iter().flatten().collect(),
                })
            }

            Node::Iterations { child, min, max, greedy } => {
                let mut pos = start;
                let mut reps = Vec::new();
                let mut count = 0usize;
                while count < *max && (*greedy || count < *min) {
                    let Some(m) = self.child(id, *child, src, pos, end, flags) else {
                        break;
                    };
                    let advanced = m.span.end != pos;
                    pos = m.span.end;
                    reps.push(m);
                    count += 1;
                    // An empty repetition would repeat forever; it satisfies any minimum.
                    if !advanced {
                        count = count.max(*min);
                        break;
                    }
                }
                (count >= *min).then(|| Match { span: Span::new(start, pos), hit_offset: None, children: reps })
            }
        }
    }

    /// Evaluate `child` of `parent`. Children must precede their parent.
    #[inline]
    fn child<S: Source + ?Sized>(
        &self,
        parent: NodeId,
        child: NodeId,
        src: &S,
        start: usize,
        end: usize,
        flags: MatchFlags,
    ) -> Option<Match> {
        if child >= parent {
            return None;
        }
        self.eval(child, src, start, end, flags)
    }

    fn class<S: Source + ?Sized>(
        &self,
        src: &S,
        start: usize,
        end: usize,
        invert: bool,
        pred: impl Fn(char) -> bool,
    ) -> Option<Match> {
        let g = src.glyph(start, end)?;
        let hit = g.chars().iter().all(|&c| pred(c));
        (hit != invert).then(|| Match::leaf(start, start + g.width))
    }

    #[inline]
    fn is_space(&self, c: char, flags: MatchFlags) -> bool {
        self.classifier.is_space(c) && (flags.multiline() || !matches!(c, '\n' | '\r'))
    }

    #[inline]
    fn eq(&self, a: char, b: char, ci: bool) -> bool {
        a == b || (ci && self.classifier.fold(a) == self.classifier.fold(b))
    }

    fn same(&self, a: &[char], b: &[char], ci: bool) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.eq(x, y, ci))
    }

    /// Offset of `needle` within `members`.
    fn position(&self, members: &[char], needle: &[char], ci: bool) -> Option<usize> {
        if needle.is_empty() || needle.len() > members.len() {
            return None;
        }
        (0..=members.len() - needle.len()).find(|&i| self.same(&members[i..i + needle.len()], needle, ci))
    }
}

/// A grammar node borrowed as a [`Recognizer`].
#[derive(Debug)]
pub struct Rule<'g, C> {
    grammar: &'g Grammar<C>,
    id: NodeId,
}

impl<C> Clone for Rule<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Rule<'_, C> {}

impl<'g, C> Rule<'g, C> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl<C: Classifier, S: Source + ?Sized> Recognizer<S> for Rule<'_, C> {
    type Output = Match;

    #[inline]
    fn recognize(&self, src: &S, start: usize, end: usize, flags: MatchFlags) -> Option<Match> {
        self.grammar.matches(self.id, src, start, end, flags)
    }
}
