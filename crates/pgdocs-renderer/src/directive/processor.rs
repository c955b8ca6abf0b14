//! Line-based directive preprocessor run before markdown parsing.

use super::fence::FenceTracker;
use super::parser::{ParsedDirective, find_directive, parse_container_line};
use super::{ContainerDirective, DirectiveContext, InlineDirective, LeafDirective};
use crate::scope::Scope;

/// Container opened in the source, waiting for its `:::`.
struct OpenContainer {
    name: String,
    /// `false` when no handler took it and its source was kept verbatim.
    handled: bool,
}

/// Rewrites directive syntax into intermediate HTML or literal text.
///
/// Lines inside fenced code blocks are left untouched. Unknown directives
/// are kept as written.
///
/// ```
/// use pgdocs_renderer::Scope;
/// use pgdocs_renderer::directive::{
///     DirectiveArgs, DirectiveContext, DirectiveOutput, DirectiveProcessor, InlineDirective,
/// };
///
/// struct Kbd;
///
/// impl InlineDirective for Kbd {
///     fn name(&self) -> &str { "kbd" }
///     fn process(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
///         DirectiveOutput::html(format!("<kbd>{}</kbd>", args.content))
///     }
/// }
///
/// let mut processor = DirectiveProcessor::new().with_inline(Kbd);
/// let output = processor.process("Press :kbd[Ctrl+C].", &Scope::new());
/// assert_eq!(output, "Press <kbd>Ctrl+C</kbd>.");
/// ```
pub struct DirectiveProcessor {
    source: Option<String>,
    inline_handlers: Vec<Box<dyn InlineDirective>>,
    leaf_handlers: Vec<Box<dyn LeafDirective>>,
    container_handlers: Vec<Box<dyn ContainerDirective>>,
    fence: FenceTracker,
    open: Vec<OpenContainer>,
    warnings: Vec<String>,
}

impl Default for DirectiveProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveProcessor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            inline_handlers: Vec::new(),
            leaf_handlers: Vec::new(),
            container_handlers: Vec::new(),
            fence: FenceTracker::default(),
            open: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Name the document being processed, used in warnings.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_inline<D: InlineDirective + 'static>(mut self, handler: D) -> Self {
        self.inline_handlers.push(Box::new(handler));
        self
    }

    #[must_use]
    pub fn with_leaf<D: LeafDirective + 'static>(mut self, handler: D) -> Self {
        self.leaf_handlers.push(Box::new(handler));
        self
    }

    #[must_use]
    pub fn with_container<D: ContainerDirective + 'static>(mut self, handler: D) -> Self {
        self.container_handlers.push(Box::new(handler));
        self
    }

    /// Preprocess a markdown document.
    ///
    /// Line endings are normalized to `\n`; a trailing newline is kept.
    #[must_use]
    pub fn process(&mut self, input: &str, scope: &Scope) -> String {
        let mut output = String::with_capacity(input.len() + input.len() / 8);
        let mut lines = input.lines().enumerate().peekable();

        while let Some((idx, line)) = lines.next() {
            let processed = self.process_line(line, idx + 1, scope);
            output.push_str(&processed);
            if lines.peek().is_some() || input.ends_with('\n') {
                output.push('\n');
            }
        }

        self.finish(&mut output);
        output
    }

    fn process_line(&mut self, line: &str, line_num: usize, scope: &Scope) -> String {
        if self.fence.is_literal(line) {
            return line.to_owned();
        }

        if let Some(directive) = parse_container_line(line) {
            return self.dispatch_container(directive, line, line_num, scope);
        }

        self.process_inline(line, line_num, scope)
    }

    fn process_inline(&mut self, line: &str, line_num: usize, scope: &Scope) -> String {
        let mut result = String::with_capacity(line.len());
        let mut copied = 0;
        let mut cursor = 0;

        let source = self.source.clone();
        let ctx = DirectiveContext {
            source: source.as_deref(),
            line: line_num,
            scope,
        };

        while let Some(found) = find_directive(line, cursor) {
            let output = match found.directive {
                ParsedDirective::Inline { name, args } => self
                    .inline_handlers
                    .iter_mut()
                    .find(|h| h.name() == name)
                    .map(|h| h.process(args, &ctx)),
                ParsedDirective::Leaf { name, args } => self
                    .leaf_handlers
                    .iter_mut()
                    .find(|h| h.name() == name)
                    .map(|h| h.process(args, &ctx)),
                ParsedDirective::ContainerStart { .. } | ParsedDirective::ContainerEnd { .. } => {
                    None
                }
            };

            if let Some(markdown) = output.and_then(super::DirectiveOutput::into_markdown) {
                result.push_str(&line[copied..found.start]);
                result.push_str(&markdown);
                copied = found.end;
            }
            cursor = found.end;
        }

        result.push_str(&line[copied..]);
        result
    }

    fn dispatch_container(
        &mut self,
        directive: ParsedDirective,
        line: &str,
        line_num: usize,
        scope: &Scope,
    ) -> String {
        match directive {
            ParsedDirective::ContainerStart { name, args } => {
                let source = self.source.clone();
                let ctx = DirectiveContext {
                    source: source.as_deref(),
                    line: line_num,
                    scope,
                };
                let output = self
                    .container_handlers
                    .iter_mut()
                    .find(|h| h.name() == name)
                    .and_then(|h| h.start(args, &ctx).into_markdown());

                let handled = output.is_some();
                self.open.push(OpenContainer { name, handled });
                output.unwrap_or_else(|| line.to_owned())
            }
            ParsedDirective::ContainerEnd { .. } => match self.open.pop() {
                Some(OpenContainer {
                    name,
                    handled: true,
                }) => self.end_container(&name, line_num),
                Some(OpenContainer { handled: false, .. }) => line.to_owned(),
                None => {
                    let location = DirectiveContext {
                        source: self.source.as_deref(),
                        line: line_num,
                        scope,
                    }
                    .location();
                    self.warnings
                        .push(format!("{location}: stray ::: with no opening directive"));
                    line.to_owned()
                }
            },
            ParsedDirective::Inline { .. } | ParsedDirective::Leaf { .. } => line.to_owned(),
        }
    }

    fn end_container(&mut self, name: &str, line_num: usize) -> String {
        self.container_handlers
            .iter_mut()
            .find(|h| h.name() == name)
            .and_then(|h| h.end(line_num))
            .unwrap_or_default()
    }

    /// Close containers left open at end of input so intermediate elements
    /// stay balanced.
    fn finish(&mut self, output: &mut String) {
        while let Some(open) = self.open.pop() {
            let source = self.source.as_deref().unwrap_or("document");
            self.warnings.push(format!(
                "{source}: unclosed container directive :::{} (missing closing :::)",
                open.name
            ));
            if open.handled {
                if !output.ends_with('\n') {
                    output.push('\n');
                }
                let closing = self.end_container(&open.name, 0);
                output.push_str(&closing);
            }
        }
    }

    /// Warnings from the processor and every handler.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut all = self.warnings.clone();
        all.extend(self.inline_handlers.iter().flat_map(|h| h.warnings().iter().cloned()));
        all.extend(self.leaf_handlers.iter().flat_map(|h| h.warnings().iter().cloned()));
        all.extend(
            self.container_handlers
                .iter()
                .flat_map(|h| h.warnings().iter().cloned()),
        );
        all
    }
}
