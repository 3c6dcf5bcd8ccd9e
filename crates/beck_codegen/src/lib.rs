//! Code generation: unparse a module into JavaScript function declarations.
//!
//! Rendering is a pure walk of the tree, so generating twice from the same
//! module yields byte-identical output. Each definition becomes one
//! declaration; declarations are joined by newlines in source order.

use beck_frontend::ast::{Def, Expr, ExprKind, Module};

pub fn generate(module: &Module) -> String {
    let decls: Vec<String> = module.defs.iter().map(emit_def).collect();
    decls.join("\n")
}

fn emit_def(def: &Def) -> String {
    let params: Vec<&str> = def.params.iter().map(|param| param.text.as_str()).collect();

    format!(
        "function {}({}) {{ return {} }};",
        def.name.text,
        params.join(","),
        emit_expr(&def.body)
    )
}

fn emit_expr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Integer(value) => value.to_string(),

        ExprKind::Var(ident) => ident.text.clone(),

        ExprKind::Call { callee, args } => {
            let args: Vec<String> = args.iter().map(emit_expr).collect();
            format!("{}({})", callee.text, args.join(","))
        }

        // Addition chains are only ever identifiers, so no parentheses are
        // needed and the output carries no spacing.
        ExprKind::BinOp { op, lhs, rhs } => {
            format!("{}{}{}", emit_expr(lhs), op.symbol(), emit_expr(rhs))
        }
    }
}
