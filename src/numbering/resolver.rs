//! Hierarchical list numbering and indentation resolution.
//!
//! The resolver is a per-document context: it keeps one stack of active
//! level nodes per numbering id, registries keyed by
//! `(marker token, level, scope)`, and the running counters. Paragraphs must
//! be fed in document order by a single caller; independent documents use
//! independent resolvers.

use std::collections::{HashMap, VecDeque};

use super::format::format_counter;
use super::marker::{estimate_marker_width, expand_template, has_placeholders, marker_token};
use super::{
    IndentSpec, ListIndentMetadata, ListIndentMode, MarkerOverride, NumberingLevel, NumberingTable,
    ParagraphEntry, ResolvedParagraph, ResolverOptions,
};

/// Index of a node in the resolver's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Enclosing list node against which counters and baselines are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Top level of the list
    Root,
    /// Inside the given parent node
    Node(NodeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum StackKey {
    Numbering(u32),
    Style,
}

type ChainKey = (String, u8, Scope);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CounterKey {
    Numbering { num_id: u32, level: u8, scope: Scope },
    Token { token: String, level: u8, scope: Scope },
}

/// One instantiated occurrence of a list level.
#[derive(Debug, Clone)]
pub struct ListLevelNode {
    num_id: Option<u32>,
    level: u8,
    definition: NumberingLevel,
    parent: Option<NodeId>,
    token: String,
    samples: VecDeque<f32>,
    unified_left: Option<f32>,
    counter: Option<u32>,
    resolved: Option<IndentSpec>,
    active: bool,
}

impl ListLevelNode {
    fn new(
        num_id: Option<u32>,
        level: u8,
        definition: NumberingLevel,
        parent: Option<NodeId>,
        token: String,
    ) -> Self {
        Self {
            num_id,
            level,
            definition,
            parent,
            token,
            samples: VecDeque::new(),
            unified_left: None,
            counter: None,
            resolved: None,
            active: true,
        }
    }

    /// Scope this node's counters live in.
    pub fn scope(&self) -> Scope {
        self.parent.map(Scope::Node).unwrap_or(Scope::Root)
    }

    /// Observed left offsets, oldest first.
    pub fn samples(&self) -> Vec<f32> {
        self.samples.iter().copied().collect()
    }

    /// Left offset all future paragraphs at this node snap to.
    pub fn unified_left(&self) -> Option<f32> {
        self.unified_left
    }

    fn record_sample(&mut self, left: f32, window: usize) {
        self.samples.push_back(left);
        while self.samples.len() > window {
            self.samples.pop_front();
        }
    }

    /// Collapse the window to its median once it is tight enough.
    fn try_unify(&mut self, tolerance: f32) -> Option<f32> {
        if self.samples.len() < 2 {
            return None;
        }
        let min = self.samples.iter().copied().fold(f32::INFINITY, f32::min);
        let max = self.samples.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        if max - min > tolerance {
            return None;
        }
        let median = median(&self.samples);
        self.samples.clear();
        self.samples.push_back(median);
        self.unified_left = Some(median);
        Some(median)
    }
}

fn median(values: &VecDeque<f32>) -> f32 {
    let mut sorted: Vec<f32> = values.iter().copied().collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

struct IndentOutcome {
    indent: IndentSpec,
    mode: ListIndentMode,
    matched: bool,
    auto_corrected: bool,
}

/// Combine style, level and paragraph indentation.
///
/// Level fields override style fields. Explicit non-zero inline fields then
/// override individually; without the explicit flag the paragraph indent is
/// added on top.
fn combine_indents(tree: &IndentSpec, entry: &ParagraphEntry) -> (IndentSpec, bool) {
    let base = entry.style_indent.overridden_by(tree);
    if entry.explicit_indent {
        if entry.inline_indent.is_zero() {
            (base, false)
        } else {
            (base.overridden_by(&entry.inline_indent), true)
        }
    } else {
        (base.plus(&entry.paragraph_indent), false)
    }
}

/// Resolves list numbering and indentation paragraph by paragraph.
///
/// # Example
///
/// ```
/// use wordlayout::numbering::{
///     AbstractNumbering, IndentSpec, ListIndentResolver, NumberingInstance, NumberingLevel,
///     NumberingTable, ParagraphEntry,
/// };
///
/// let table = NumberingTable::new()
///     .with_abstract(AbstractNumbering::new(0).with_level(
///         NumberingLevel::decimal(0).with_indent(IndentSpec::from_twips(720.0, 0.0, 0.0, 360.0)),
///     ))
///     .with_instance(NumberingInstance::new(1, 0));
///
/// let mut resolver = ListIndentResolver::new(table);
/// let first = resolver.resolve(&ParagraphEntry::numbered(1, 0));
/// assert_eq!(first.marker.as_deref(), Some("1."));
/// assert_eq!(first.text_start, 36.0);
/// assert_eq!(first.marker_start, 18.0);
/// ```
#[derive(Debug, Clone)]
pub struct ListIndentResolver {
    table: NumberingTable,
    options: ResolverOptions,
    nodes: Vec<ListLevelNode>,
    stacks: HashMap<StackKey, Vec<NodeId>>,
    node_registry: HashMap<ChainKey, NodeId>,
    baselines: HashMap<ChainKey, IndentSpec>,
    chain_baselines: HashMap<(String, u8), IndentSpec>,
    counters: HashMap<CounterKey, u32>,
    last_at_level: HashMap<u8, NodeId>,
}

impl ListIndentResolver {
    /// Create a resolver over a numbering table with default options.
    pub fn new(table: NumberingTable) -> Self {
        Self::with_options(table, ResolverOptions::default())
    }

    /// Create a resolver with custom options.
    pub fn with_options(table: NumberingTable, options: ResolverOptions) -> Self {
        Self {
            table,
            options,
            nodes: Vec::new(),
            stacks: HashMap::new(),
            node_registry: HashMap::new(),
            baselines: HashMap::new(),
            chain_baselines: HashMap::new(),
            counters: HashMap::new(),
            last_at_level: HashMap::new(),
        }
    }

    /// The numbering definitions.
    pub fn table(&self) -> &NumberingTable {
        &self.table
    }

    /// The resolver options.
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Drop all per-run state; definitions and options are kept.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.stacks.clear();
        self.node_registry.clear();
        self.baselines.clear();
        self.chain_baselines.clear();
        self.counters.clear();
        self.last_at_level.clear();
    }

    /// Resolve a sequence of paragraphs in order.
    pub fn resolve_all(&mut self, entries: &[ParagraphEntry]) -> Vec<ResolvedParagraph> {
        entries.iter().map(|e| self.resolve(e)).collect()
    }

    /// Resolve one paragraph. Paragraphs must arrive in document order.
    pub fn resolve(&mut self, entry: &ParagraphEntry) -> ResolvedParagraph {
        if entry.has_border {
            log::trace!("bordered paragraph: list logic bypassed");
            return Self::resolve_bordered(entry);
        }

        if let Some(num_id) = entry.num_id {
            let level = entry.level.unwrap_or(0);
            match self.table.level(num_id, level) {
                Some(definition) => return self.resolve_numbered(entry, num_id, definition),
                None => log::warn!(
                    "numbering id {} has no definition; treating paragraph as plain",
                    num_id
                ),
            }
        }

        let level = entry.level.unwrap_or(0);
        if entry.style_is_list || self.continues_previous(entry, level) {
            return self.resolve_list_style(entry, level);
        }

        Self::resolve_plain(entry)
    }

    /// Levels on the active stack of a numbering id, bottom to top.
    pub fn active_levels(&self, num_id: u32) -> Vec<u8> {
        self.stacks
            .get(&StackKey::Numbering(num_id))
            .map(|stack| stack.iter().map(|id| self.nodes[id.0].level).collect())
            .unwrap_or_default()
    }

    /// Top node of a numbering id's active stack.
    pub fn active_node(&self, num_id: u32) -> Option<&ListLevelNode> {
        self.stacks
            .get(&StackKey::Numbering(num_id))
            .and_then(|stack| stack.last())
            .map(|id| &self.nodes[id.0])
    }

    /// Number of nodes created since the last reset.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn resolve_bordered(entry: &ParagraphEntry) -> ResolvedParagraph {
        let indent = [
            entry.inline_indent,
            entry.paragraph_indent,
            entry.style_indent,
        ]
        .into_iter()
        .find(|i| !i.is_zero())
        .unwrap_or_default();

        let mut out = ResolvedParagraph::from_indent(indent.normalized());
        out.num_id = entry.num_id;
        out.level = entry.level;
        out
    }

    fn resolve_plain(entry: &ParagraphEntry) -> ResolvedParagraph {
        let base = entry.style_indent;
        let indent = if entry.explicit_indent {
            base.overridden_by(&entry.inline_indent)
        } else {
            base.plus(&entry.paragraph_indent)
        };
        let mut out = ResolvedParagraph::from_indent(indent.normalized());
        out.level = entry.level;
        out
    }

    fn continues_previous(&self, entry: &ParagraphEntry, level: u8) -> bool {
        let Some(text) = entry.marker_text.as_deref() else {
            return false;
        };
        let token = marker_token(text);
        !token.is_empty()
            && self
                .active_at_level(level)
                .is_some_and(|id| self.nodes[id.0].token == token)
    }

    fn active_at_level(&self, level: u8) -> Option<NodeId> {
        self.last_at_level
            .get(&level)
            .copied()
            .filter(|id| self.nodes[id.0].active)
    }

    fn resolve_numbered(
        &mut self,
        entry: &ParagraphEntry,
        num_id: u32,
        definition: NumberingLevel,
    ) -> ResolvedParagraph {
        let level = definition.level;
        let template = definition.text.clone();
        let token = marker_token(
            entry
                .marker_text
                .as_deref()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or(&template),
        );
        log::trace!(
            "numbered paragraph: num {} level {} token '{}'",
            num_id,
            level,
            token
        );

        let previous = self.active_at_level(level);
        let node_id = self.enter_level(
            StackKey::Numbering(num_id),
            Some(num_id),
            level,
            definition,
            &token,
        );
        let scope = self.nodes[node_id.0].scope();

        let (marker, marker_override) = self.synthesize_marker(
            node_id,
            CounterKey::Numbering {
                num_id,
                level,
                scope,
            },
            entry,
        );

        let tree = self.nodes[node_id.0].definition.indent;
        let outcome =
            self.resolve_list_indent(node_id, previous, &token, &tree, entry, marker.as_deref());
        self.finish(node_id, &token, entry, outcome, marker, marker_override, true)
    }

    fn resolve_list_style(&mut self, entry: &ParagraphEntry, level: u8) -> ResolvedParagraph {
        let authored = entry
            .marker_text
            .as_deref()
            .filter(|t| !t.trim().is_empty());
        let candidate = authored.map(marker_token);
        let compatible = self.active_at_level(level).filter(|id| match &candidate {
            Some(token) => self.nodes[id.0].token == *token,
            None => true,
        });

        let (node_id, counter_key) = match compatible {
            Some(id) => {
                let node = &self.nodes[id.0];
                let key = match node.num_id {
                    Some(num_id) => CounterKey::Numbering {
                        num_id,
                        level: node.level,
                        scope: node.scope(),
                    },
                    None => CounterKey::Token {
                        token: node.token.clone(),
                        level: node.level,
                        scope: node.scope(),
                    },
                };
                (id, key)
            }
            None => {
                let token = candidate.clone().unwrap_or_default();
                let definition = NumberingLevel::from_marker(
                    level,
                    authored.unwrap_or_default(),
                    entry.style_indent,
                );
                let id = self.enter_level(StackKey::Style, None, level, definition, &token);
                let scope = self.nodes[id.0].scope();
                (
                    id,
                    CounterKey::Token {
                        token,
                        level,
                        scope,
                    },
                )
            }
        };
        log::trace!(
            "list-style paragraph at level {} (continuing: {})",
            level,
            compatible.is_some()
        );

        let token = self.nodes[node_id.0].token.clone();
        let (marker, marker_override) = self.synthesize_marker(node_id, counter_key, entry);

        let mut outcome = match self.nodes[node_id.0].resolved.filter(|_| compatible.is_some()) {
            Some(previous) => {
                let (indent, mode) = if entry.explicit_indent && !entry.inline_indent.is_zero() {
                    (
                        previous.overridden_by(&entry.inline_indent),
                        ListIndentMode::Manual,
                    )
                } else {
                    (previous, ListIndentMode::Continuation)
                };
                IndentOutcome {
                    indent: indent.normalized(),
                    mode,
                    matched: true,
                    auto_corrected: false,
                }
            }
            None => {
                let tree = self.nodes[node_id.0].definition.indent;
                self.resolve_list_indent(node_id, None, &token, &tree, entry, marker.as_deref())
            }
        };

        let register = !entry.marker_hidden;
        if entry.marker_hidden {
            outcome.indent = outcome.indent.collapsed();
        }
        self.finish(
            node_id,
            &token,
            entry,
            outcome,
            marker,
            marker_override,
            register,
        )
    }

    /// Put a node for `level` on top of a stack and return it.
    ///
    /// A top node at the same level is reused (for style-driven lists only
    /// when its token matches). Otherwise every node at or below `level`
    /// is popped before a new child of the remaining top is pushed.
    fn enter_level(
        &mut self,
        stack_key: StackKey,
        num_id: Option<u32>,
        level: u8,
        definition: NumberingLevel,
        token: &str,
    ) -> NodeId {
        let stack = self.stacks.entry(stack_key).or_default();

        if let Some(&top) = stack.last() {
            let node = &mut self.nodes[top.0];
            let same_chain = matches!(stack_key, StackKey::Numbering(_)) || node.token == token;
            if node.level == level && same_chain {
                node.token = token.to_string();
                return top;
            }
        }

        while let Some(&top) = stack.last() {
            if self.nodes[top.0].level < level {
                break;
            }
            stack.pop();
            self.nodes[top.0].active = false;
        }

        let parent = stack.last().copied();
        let id = NodeId(self.nodes.len());
        let mut node = ListLevelNode::new(num_id, level, definition, parent, token.to_string());

        // Reopening a chain at the same place keeps its unification history.
        let key = (token.to_string(), level, node.scope());
        if let Some(prior) = self.node_registry.get(&key) {
            let prior = &self.nodes[prior.0];
            node.samples = prior.samples.clone();
            node.unified_left = prior.unified_left;
        }

        self.nodes.push(node);
        stack.push(id);
        id
    }

    /// Baseline reuse, indent combination, continuation and auto-correction.
    fn resolve_list_indent(
        &mut self,
        node_id: NodeId,
        previous: Option<NodeId>,
        token: &str,
        tree: &IndentSpec,
        entry: &ParagraphEntry,
        marker: Option<&str>,
    ) -> IndentOutcome {
        let level = self.nodes[node_id.0].level;
        let scope = self.nodes[node_id.0].scope();

        let baseline = if token.is_empty() {
            None
        } else {
            self.baselines
                .get(&(token.to_string(), level, scope))
                .or_else(|| self.chain_baselines.get(&(token.to_string(), level)))
                .copied()
        };

        let (mut indent, mut mode, mut matched) = match baseline {
            Some(baseline) => (baseline, ListIndentMode::AutoMatch, true),
            None => {
                let (combined, manual) = combine_indents(tree, entry);
                let mode = if manual {
                    ListIndentMode::Manual
                } else {
                    ListIndentMode::Auto
                };
                (combined, mode, false)
            }
        };

        if !matched && !token.is_empty() {
            let adopted = previous
                .filter(|&p| p != node_id)
                .map(|p| &self.nodes[p.0])
                .filter(|p| p.token == token)
                .and_then(|p| p.resolved);
            if let Some(adopted) = adopted {
                indent = adopted;
                mode = ListIndentMode::Continuation;
                matched = true;
            }
        }

        if matched && entry.explicit_indent && !entry.inline_indent.is_zero() {
            indent = indent.overridden_by(&entry.inline_indent);
            mode = ListIndentMode::Manual;
        }

        let mut indent = indent.normalized();
        let mut auto_corrected = false;
        if !matched
            && mode != ListIndentMode::Manual
            && entry.auto_correct
            && self.options.auto_correct
        {
            auto_corrected = self.auto_correct(node_id, &mut indent, entry, marker);
        }

        IndentOutcome {
            indent: indent.normalized(),
            mode,
            matched,
            auto_corrected,
        }
    }

    fn auto_correct(
        &mut self,
        node_id: NodeId,
        indent: &mut IndentSpec,
        entry: &ParagraphEntry,
        marker: Option<&str>,
    ) -> bool {
        let tolerance = self.options.unify_tolerance;
        let window = self.options.sample_window;
        let char_ratio = self.options.marker_char_ratio;
        let buffer = self.options.marker_buffer;
        let font_size = entry
            .font_size
            .filter(|s| *s > 0.0)
            .unwrap_or(self.options.default_font_size);

        let node = &mut self.nodes[node_id.0];
        let mut changed = false;

        let unified = match node.unified_left {
            Some(left) => Some(left),
            None => {
                node.record_sample(indent.left, window);
                node.try_unify(tolerance)
            }
        };
        if let Some(left) = unified {
            if (left - indent.left).abs() > f32::EPSILON {
                log::debug!(
                    "level {} left {} unified to {}",
                    node.level,
                    indent.left,
                    left
                );
                indent.left = left;
                changed = true;
            }
        }

        if indent.hanging > 0.0 && !entry.marker_hidden {
            if let Some(text) = marker.filter(|t| !t.is_empty()) {
                let minimum = estimate_marker_width(text, font_size, char_ratio) + buffer;
                if indent.hanging < minimum {
                    log::debug!(
                        "hanging {} widened to {} for marker '{}'",
                        indent.hanging,
                        minimum,
                        text
                    );
                    indent.hanging = minimum;
                    changed = true;
                }
            }
        }

        changed
    }

    /// Produce the marker text, advancing the counter for counted formats.
    fn synthesize_marker(
        &mut self,
        node_id: NodeId,
        key: CounterKey,
        entry: &ParagraphEntry,
    ) -> (Option<String>, Option<MarkerOverride>) {
        let (format, template, start, level) = {
            let node = &self.nodes[node_id.0];
            (
                node.definition.format,
                node.definition.text.clone(),
                node.definition.start,
                node.level,
            )
        };

        if !format.synthesizes_counter() || !has_placeholders(&template) {
            let text = if format.synthesizes_counter() {
                template
            } else {
                expand_template(&template, |_| None)
            };
            return (Some(text).filter(|t| !t.is_empty()), None);
        }

        let current = if entry.number_override {
            None
        } else {
            self.counters.get(&key).copied()
        };
        let (value, restart) = match current {
            Some(value) => (value.saturating_add(1), false),
            None => (start, true),
        };
        self.counters.insert(key, value);
        self.nodes[node_id.0].counter = Some(value);

        let text = expand_template(&template, |index| {
            if index == level {
                Some(format_counter(value, format))
            } else {
                self.ancestor_counter(node_id, index)
            }
        });

        let marker_override = MarkerOverride {
            counter: value,
            text: text.clone(),
            restart,
        };
        (Some(text), Some(marker_override))
    }

    /// Formatted counter of the ancestor at `index`, walking parent links.
    fn ancestor_counter(&self, node_id: NodeId, index: u8) -> Option<String> {
        let node = &self.nodes[node_id.0];
        if index > node.level {
            return None;
        }
        let mut cursor = node.parent;
        while let Some(id) = cursor {
            let ancestor = &self.nodes[id.0];
            if ancestor.level == index {
                let value = ancestor.counter.unwrap_or(ancestor.definition.start);
                return Some(format_counter(value, ancestor.definition.format));
            }
            if ancestor.level < index {
                break;
            }
            cursor = ancestor.parent;
        }

        let definition = self.table.level(node.num_id?, index)?;
        Some(format_counter(definition.start, definition.format))
    }

    #[allow(clippy::too_many_arguments)]
    fn finish(
        &mut self,
        node_id: NodeId,
        token: &str,
        entry: &ParagraphEntry,
        outcome: IndentOutcome,
        marker: Option<String>,
        marker_override: Option<MarkerOverride>,
        register: bool,
    ) -> ResolvedParagraph {
        let (num_id, level, scope) = {
            let node = &self.nodes[node_id.0];
            (node.num_id, node.level, node.scope())
        };

        if register && !token.is_empty() {
            let key = (token.to_string(), level, scope);
            if outcome.mode != ListIndentMode::Manual {
                self.baselines.entry(key.clone()).or_insert(outcome.indent);
                self.chain_baselines
                    .entry((token.to_string(), level))
                    .or_insert(outcome.indent);
            }
            self.node_registry.insert(key, node_id);
        }
        self.last_at_level.insert(level, node_id);

        let mut out = ResolvedParagraph::from_indent(outcome.indent);
        out.num_id = num_id;
        out.level = Some(level);
        out.marker = marker;
        out.marker_hidden = entry.marker_hidden;
        out.metadata = ListIndentMetadata {
            list_indent_mode: outcome.mode,
            auto_corrected: outcome.auto_corrected,
            matched_previous_chain: outcome.matched,
            marker_override,
        };
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbering::{AbstractNumbering, NumberFormat, NumberingInstance};

    fn table() -> NumberingTable {
        NumberingTable::new()
            .with_abstract(
                AbstractNumbering::new(0)
                    .with_level(
                        NumberingLevel::decimal(0)
                            .with_indent(IndentSpec::from_twips(720.0, 0.0, 0.0, 360.0)),
                    )
                    .with_level(
                        NumberingLevel::new(1, NumberFormat::LowerLetter, "%1.%2.")
                            .with_indent(IndentSpec::from_twips(1440.0, 0.0, 0.0, 360.0)),
                    ),
            )
            .with_abstract(
                AbstractNumbering::new(1).with_level(
                    NumberingLevel::decimal(0)
                        .with_indent(IndentSpec::from_twips(1080.0, 0.0, 0.0, 360.0)),
                ),
            )
            .with_instance(NumberingInstance::new(1, 0))
            .with_instance(NumberingInstance::new(2, 1))
    }

    #[test]
    fn test_numbered_sequence() {
        let mut resolver = ListIndentResolver::new(table());
        let entries = vec![ParagraphEntry::numbered(1, 0); 3];
        let results = resolver.resolve_all(&entries);

        let markers: Vec<_> = results.iter().map(|r| r.marker.clone().unwrap()).collect();
        assert_eq!(markers, ["1.", "2.", "3."]);
        for r in &results {
            assert_eq!(r.indent.left, 36.0);
            assert_eq!(r.indent.hanging, 18.0);
            assert_eq!(r.indent.first_line, 0.0);
            assert_eq!(r.text_start, 36.0);
            assert_eq!(r.marker_start, 18.0);
        }
        assert_eq!(results[0].metadata.list_indent_mode, ListIndentMode::Auto);
        assert!(results[0].metadata.marker_override.as_ref().unwrap().restart);
        assert_eq!(
            results[1].metadata.list_indent_mode,
            ListIndentMode::AutoMatch
        );
        assert!(!results[1].metadata.marker_override.as_ref().unwrap().restart);
    }

    #[test]
    fn test_nested_levels_restart() {
        let mut resolver = ListIndentResolver::new(table());
        let entries = [
            ParagraphEntry::numbered(1, 0),
            ParagraphEntry::numbered(1, 1),
            ParagraphEntry::numbered(1, 1),
            ParagraphEntry::numbered(1, 0),
            ParagraphEntry::numbered(1, 1),
        ];
        let markers: Vec<_> = resolver
            .resolve_all(&entries)
            .into_iter()
            .map(|r| r.marker.unwrap())
            .collect();
        assert_eq!(markers, ["1.", "1.a.", "1.b.", "2.", "2.a."]);
    }

    #[test]
    fn test_stack_depth() {
        let mut resolver = ListIndentResolver::new(table());
        resolver.resolve(&ParagraphEntry::numbered(1, 0));
        resolver.resolve(&ParagraphEntry::numbered(1, 1));
        assert_eq!(resolver.active_levels(1), vec![0, 1]);
        resolver.resolve(&ParagraphEntry::numbered(1, 0));
        assert_eq!(resolver.active_levels(1), vec![0]);
    }

    #[test]
    fn test_cross_numbering_unification() {
        let mut resolver = ListIndentResolver::new(table());
        let first = resolver.resolve(&ParagraphEntry::numbered(1, 0));
        let second = resolver.resolve(&ParagraphEntry::numbered(2, 0));
        assert_eq!(first.indent.left, 36.0);
        assert_eq!(second.indent.left, 36.0);
        assert!(second.metadata.matched_previous_chain);
        // Separate numbering ids keep separate counters.
        assert_eq!(second.marker.as_deref(), Some("1."));
    }

    #[test]
    fn test_explicit_indent_is_manual() {
        let mut resolver = ListIndentResolver::new(table());
        let entry = ParagraphEntry::numbered(1, 0).with_inline_indent(IndentSpec::left(54.0));
        let result = resolver.resolve(&entry);
        assert_eq!(result.indent.left, 54.0);
        assert_eq!(result.indent.hanging, 18.0);
        assert_eq!(result.metadata.list_indent_mode, ListIndentMode::Manual);
    }

    #[test]
    fn test_jitter_unified_to_median() {
        let mut resolver = ListIndentResolver::new(table());
        // Rendered markers give distinct tokens, so only the sample window applies.
        let first = resolver.resolve(
            &ParagraphEntry::numbered(1, 0)
                .with_marker_text("1.")
                .with_paragraph_indent(IndentSpec::left(0.0)),
        );
        let second = resolver.resolve(
            &ParagraphEntry::numbered(1, 0)
                .with_marker_text("2.")
                .with_paragraph_indent(IndentSpec::left(4.0)),
        );
        assert_eq!(first.indent.left, 36.0);
        assert_eq!(second.indent.left, 38.0);
        assert!(second.metadata.auto_corrected);

        let node = resolver.active_node(1).unwrap();
        assert_eq!(node.unified_left(), Some(38.0));
        assert_eq!(node.samples(), vec![38.0]);
    }

    #[test]
    fn test_wide_spread_not_unified() {
        let mut resolver = ListIndentResolver::new(table());
        resolver.resolve(&ParagraphEntry::numbered(1, 0).with_marker_text("1."));
        let second = resolver.resolve(
            &ParagraphEntry::numbered(1, 0)
                .with_marker_text("2.")
                .with_paragraph_indent(IndentSpec::left(20.0)),
        );
        assert_eq!(second.indent.left, 56.0);
        assert!(!second.metadata.auto_corrected);
    }

    #[test]
    fn test_minimum_hanging() {
        let mut resolver = ListIndentResolver::new(table());
        let result = resolver.resolve(&ParagraphEntry::numbered(1, 0).with_font_size(24.0));
        // "1." at 24pt: 2 * 24 * 0.5 + 4 = 28 > 18.
        assert_eq!(result.indent.hanging, 28.0);
        assert!(result.metadata.auto_corrected);
    }

    #[test]
    fn test_bordered_bypass() {
        let mut resolver = ListIndentResolver::new(table());
        let entry = ParagraphEntry::numbered(1, 0)
            .bordered()
            .with_style("Boxed", IndentSpec::left(10.0))
            .with_paragraph_indent(IndentSpec::left(20.0));
        let result = resolver.resolve(&entry);
        assert_eq!(result.indent.left, 20.0);
        assert_eq!(result.num_id, Some(1));
        assert!(result.marker.is_none());
        assert_eq!(resolver.node_count(), 0);
    }

    #[test]
    fn test_plain_paragraph() {
        let mut resolver = ListIndentResolver::new(table());
        let additive = resolver.resolve(
            &ParagraphEntry::new()
                .with_style("Body", IndentSpec::left(10.0))
                .with_paragraph_indent(IndentSpec::new(5.0, 0.0, 12.0, 0.0)),
        );
        assert_eq!(additive.indent, IndentSpec::new(15.0, 0.0, 12.0, 0.0));
        assert_eq!(additive.text_start, 27.0);

        let explicit = resolver.resolve(
            &ParagraphEntry::new()
                .with_style("Body", IndentSpec::new(10.0, 4.0, 0.0, 0.0))
                .with_inline_indent(IndentSpec::left(30.0)),
        );
        assert_eq!(explicit.indent, IndentSpec::new(30.0, 4.0, 0.0, 0.0));
        assert_eq!(explicit.metadata.list_indent_mode, ListIndentMode::None);
    }

    #[test]
    fn test_unknown_numbering_is_plain() {
        let mut resolver = ListIndentResolver::new(table());
        let result = resolver.resolve(
            &ParagraphEntry::numbered(42, 0).with_style("Body", IndentSpec::left(9.0)),
        );
        assert_eq!(result.indent.left, 9.0);
        assert!(!result.is_list_item());
    }

    #[test]
    fn test_list_style_continuation() {
        let mut resolver = ListIndentResolver::new(table());
        let style = IndentSpec::hanging(24.0, 12.0);
        let first = resolver.resolve(
            &ParagraphEntry::new()
                .with_style("List Bullet", style)
                .list_style(0)
                .with_marker_text("•"),
        );
        assert_eq!(first.indent, style);
        assert_eq!(first.marker.as_deref(), Some("•"));

        // Matching marker token continues the list without the style flag.
        let second = resolver.resolve(&ParagraphEntry::new().with_marker_text("•"));
        assert_eq!(second.indent, style);
        assert_eq!(
            second.metadata.list_indent_mode,
            ListIndentMode::Continuation
        );
    }

    #[test]
    fn test_list_style_hidden_marker_collapses() {
        let mut resolver = ListIndentResolver::new(table());
        let result = resolver.resolve(
            &ParagraphEntry::new()
                .with_style("List", IndentSpec::new(24.0, 6.0, 0.0, 12.0))
                .list_style(0)
                .with_marker_text("-")
                .hidden_marker(),
        );
        assert_eq!(result.indent, IndentSpec::new(0.0, 6.0, 0.0, 0.0));
        assert!(result.marker_hidden);
    }

    #[test]
    fn test_number_override_restarts() {
        let mut resolver = ListIndentResolver::new(table());
        resolver.resolve(&ParagraphEntry::numbered(1, 0));
        resolver.resolve(&ParagraphEntry::numbered(1, 0));
        let restarted = resolver.resolve(&ParagraphEntry::numbered(1, 0).restart_numbering());
        assert_eq!(restarted.marker.as_deref(), Some("1."));
        assert!(restarted.metadata.marker_override.unwrap().restart);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let entries = vec![
            ParagraphEntry::numbered(1, 0),
            ParagraphEntry::numbered(1, 1),
            ParagraphEntry::numbered(2, 0).with_marker_text("7."),
            ParagraphEntry::new().with_style("Body", IndentSpec::left(3.0)),
            ParagraphEntry::numbered(1, 0),
        ];
        let mut resolver = ListIndentResolver::new(table());
        let first = resolver.resolve_all(&entries);
        resolver.reset();
        assert_eq!(resolver.node_count(), 0);
        let second = resolver.resolve_all(&entries);
        assert_eq!(first, second);
    }
}
