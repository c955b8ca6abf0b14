//! `::contributors{users="a,b"}`: contributor avatars.

use crate::directive::{DirectiveArgs, DirectiveContext, DirectiveOutput, LeafDirective};
use crate::element;
use crate::node::Component;

use super::block;

pub struct ContributorsDirective;

impl LeafDirective for ContributorsDirective {
    fn name(&self) -> &'static str {
        "contributors"
    }

    fn process(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
        let users = args
            .get("users")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .collect::<Vec<_>>()
            .join(",");

        let attrs: Vec<(&str, &str)> = if users.is_empty() {
            Vec::new()
        } else {
            vec![("users", users.as_str())]
        };
        DirectiveOutput::html(block(&element::void(Component::Contributors, &attrs)))
    }
}
