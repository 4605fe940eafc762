//! Source-like text rendering.

use core::fmt::Write;

use super::{Detail, Node};
use crate::node::{NodeKind, SyntaxNode};

fn join(nodes: &[Node<'_>], out: &mut String) {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        render(*node, out);
    }
}

fn render_opt(node: Option<Node<'_>>, out: &mut String) {
    if let Some(node) = node {
        render(node, out);
    }
}

pub(super) fn render(node: Node<'_>, out: &mut String) {
    match &node.data().detail {
        Detail::Literal(value) => {
            let _ = write!(out, "{value}");
        }
        Detail::Variable { name, .. } => {
            if let Some(target) = node.target() {
                render(target, out);
                out.push('.');
            }
            out.push_str(name);
        }
        Detail::Invocation { name, .. } => {
            if let Some(target) = node.target() {
                render(target, out);
                out.push('.');
            }
            out.push_str(name);
            out.push('(');
            join(&node.arguments(), out);
            out.push(')');
        }
        Detail::Constructor { .. } => {
            out.push_str("new ");
            out.push_str(node.type_name().unwrap_or("?"));
            out.push('(');
            join(&node.arguments(), out);
            out.push(')');
        }
        Detail::Unary(op) => {
            if op.is_postfix() {
                render_opt(node.operand(), out);
                out.push_str(op.symbol());
            } else {
                out.push_str(op.symbol());
                render_opt(node.operand(), out);
            }
        }
        Detail::Binary(op) => {
            render_opt(node.left(), out);
            let _ = write!(out, " {op} ");
            render_opt(node.right(), out);
        }
        Detail::Conditional => {
            render_opt(node.condition(), out);
            out.push_str(" ? ");
            render_opt(node.then_branch(), out);
            out.push_str(" : ");
            render_opt(node.else_branch(), out);
        }
        Detail::If { .. } => {
            out.push_str("if (");
            render_opt(node.condition(), out);
            out.push(')');
            if let Some(then) = node.then_branch() {
                out.push(' ');
                render(then, out);
            }
            if let Some(otherwise) = node.else_branch() {
                out.push_str(" else ");
                render(otherwise, out);
            }
        }
        Detail::Block => {
            out.push('{');
            for statement in node.statements() {
                out.push(' ');
                render(statement, out);
                out.push(';');
            }
            out.push_str(" }");
        }
        Detail::Loop => {
            let body = node.children().get(1).copied();
            match node.kind() {
                NodeKind::Do => {
                    out.push_str("do ");
                    render_opt(body, out);
                    out.push_str(" while (");
                    render_opt(node.condition(), out);
                    out.push(')');
                }
                NodeKind::For => {
                    out.push_str("for (; ");
                    render_opt(node.condition(), out);
                    out.push_str("; ) ");
                    render_opt(body, out);
                }
                _ => {
                    out.push_str("while (");
                    render_opt(node.condition(), out);
                    out.push_str(") ");
                    render_opt(body, out);
                }
            }
        }
        Detail::Return => {
            out.push_str("return");
            if let Some(value) = node.children().first() {
                out.push(' ');
                render(*value, out);
            }
        }
        Detail::Other { label } => {
            out.push_str(label);
            let children = node.children();
            if !children.is_empty() {
                out.push('(');
                join(&children, out);
                out.push(')');
            }
        }
        Detail::Type { name } => out.push_str(name),
    }
}
