//! Lowering: concrete tree-sitter nodes into the closed typed tree.
//!
//! Recurses through module, function, and class bodies only. Compound
//! statements (conditionals, loops, `try`, `with`) lower to opaque
//! verbatim statements. Verbatim text is dedented to column zero so the
//! regenerator can re-indent by nesting depth.

use ast_grep_core::Node;

use gloss_core::{Module, Node as GNode, Span};

/// Lower a parsed tree into the typed module tree.
#[must_use]
pub fn lower<D: ast_grep_core::Doc>(tree: &ast_grep_core::AstGrep<D>) -> Module {
    Module {
        body: lower_block(&tree.root()),
    }
}

fn lower_block<D: ast_grep_core::Doc>(block: &Node<D>) -> Vec<GNode> {
    block.children().map(|child| lower_statement(&child)).collect()
}

fn lower_statement<D: ast_grep_core::Doc>(node: &Node<D>) -> GNode {
    let span = Some(span_of(node));
    match node.kind().as_ref() {
        "import_statement" | "import_from_statement" | "future_import_statement" => {
            GNode::Import {
                text: node_text(node),
                span,
            }
        }
        "comment" => GNode::Comment {
            text: node_text(node),
            span,
        },
        "expression_statement" => lower_expression_statement(node, span),
        "function_definition" => lower_function(node, node, span),
        "class_definition" => lower_class(node, node, span),
        "decorated_definition" => lower_decorated(node, span),
        "if_statement" | "match_statement" => GNode::Conditional {
            text: node_text(node),
            span,
        },
        "for_statement" | "while_statement" => GNode::Loop {
            text: node_text(node),
            span,
        },
        "return_statement" => {
            let text = node_text(node);
            let value = text
                .strip_prefix("return")
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from);
            GNode::Return { value, text, span }
        }
        _ => GNode::Other {
            text: node_text(node),
            span,
        },
    }
}

/// An expression statement is a constant only when its sole content is a
/// string or number literal; an assignment gets its own node kind.
fn lower_expression_statement<D: ast_grep_core::Doc>(
    node: &Node<D>,
    span: Option<Span>,
) -> GNode {
    let Some(first) = node.children().next() else {
        return GNode::Other {
            text: node_text(node),
            span,
        };
    };
    match first.kind().as_ref() {
        "string" | "integer" | "float" | "true" | "false" | "none" => GNode::ConstantExpr {
            value: node_text(node),
            span,
        },
        "assignment" => {
            match (first.field("left"), first.field("right")) {
                (Some(left), Some(right)) => GNode::Assign {
                    target: left.text().to_string(),
                    value: node_text(&right),
                    text: node_text(node),
                    span,
                },
                // Annotation-only statements (`x: int`) have no right side.
                _ => GNode::Other {
                    text: node_text(node),
                    span,
                },
            }
        }
        _ => GNode::Other {
            text: node_text(node),
            span,
        },
    }
}

fn lower_function<D: ast_grep_core::Doc>(
    def: &Node<D>,
    outer: &Node<D>,
    span: Option<Span>,
) -> GNode {
    let name = def
        .field("name")
        .map(|n| n.text().to_string())
        .unwrap_or_default();
    let body = def.field("body");
    GNode::FunctionDef {
        name,
        params: positional_params(def),
        header: header_text(outer, body.as_ref()),
        body: body.as_ref().map(lower_block).unwrap_or_default(),
        span,
    }
}

fn lower_class<D: ast_grep_core::Doc>(
    def: &Node<D>,
    outer: &Node<D>,
    span: Option<Span>,
) -> GNode {
    let name = def
        .field("name")
        .map(|n| n.text().to_string())
        .unwrap_or_default();
    let body = def.field("body");
    GNode::ClassDef {
        name,
        header: header_text(outer, body.as_ref()),
        body: body.as_ref().map(lower_block).unwrap_or_default(),
        span,
    }
}

/// A decorated definition lowers to its inner def; the decorators stay
/// verbatim in the header and the span covers the whole decorated node.
fn lower_decorated<D: ast_grep_core::Doc>(node: &Node<D>, span: Option<Span>) -> GNode {
    let inner = node.children().find(|c| {
        let k = c.kind();
        k.as_ref() == "function_definition" || k.as_ref() == "class_definition"
    });
    match inner {
        Some(def) if def.kind().as_ref() == "function_definition" => {
            lower_function(&def, node, span)
        }
        Some(def) => lower_class(&def, node, span),
        None => GNode::Other {
            text: node_text(node),
            span,
        },
    }
}

/// Positional parameter names only: plain, typed, and defaulted names.
/// `*args`, `**kwargs`, and the bare `*`/`/` separators are dropped.
fn positional_params<D: ast_grep_core::Doc>(def: &Node<D>) -> Vec<String> {
    let Some(params) = def.field("parameters") else {
        return Vec::new();
    };
    params
        .children()
        .filter_map(|c| match c.kind().as_ref() {
            "identifier" => Some(c.text().to_string()),
            "typed_parameter" => c
                .children()
                .find(|n| n.kind().as_ref() == "identifier")
                .map(|n| n.text().to_string()),
            "default_parameter" | "typed_default_parameter" => {
                c.field("name").map(|n| n.text().to_string())
            }
            _ => None,
        })
        .collect()
}

/// Everything of the (possibly decorated) definition before its body:
/// decorator lines plus the `def`/`class` line. The body block is the
/// trailing suffix of the definition's text, so a length subtraction on
/// the raw text is exact.
fn header_text<D: ast_grep_core::Doc>(outer: &Node<D>, body: Option<&Node<D>>) -> String {
    let raw = outer.text().to_string();
    let header_raw = body.map_or(raw.as_str(), |b| {
        let body_len = b.text().len();
        &raw[..raw.len() - body_len]
    });
    let col = outer.start_pos().column(outer);
    dedent(header_raw.trim_end(), col)
}

/// Node text with continuation lines dedented by the node's start column.
fn node_text<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    let col = node.start_pos().column(node);
    dedent(node.text().as_ref(), col)
}

fn span_of<D: ast_grep_core::Doc>(node: &Node<D>) -> Span {
    let start = node.start_pos().line();
    let end_pos = node.end_pos();
    // A node ending at column 0 stopped at the previous line's newline.
    let end = if end_pos.column(node) == 0 && end_pos.line() > start {
        end_pos.line() - 1
    } else {
        end_pos.line()
    };
    Span::new(start as u32, end as u32)
}

fn dedent(text: &str, col: usize) -> String {
    if col == 0 || !text.contains('\n') {
        return text.to_string();
    }
    let mut lines = text.lines();
    let mut out = lines.next().unwrap_or("").to_string();
    for line in lines {
        out.push('\n');
        out.push_str(strip_indent(line, col));
    }
    out
}

fn strip_indent(line: &str, col: usize) -> &str {
    let mut stripped = 0;
    for (i, ch) in line.char_indices() {
        if stripped >= col || (ch != ' ' && ch != '\t') {
            return &line[i..];
        }
        stripped += 1;
    }
    ""
}
