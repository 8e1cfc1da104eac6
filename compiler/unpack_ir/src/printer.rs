//! Source printer.
//!
//! Renders a unit, statement list or expression back to Java-like source.
//! Output is canonical rather than faithful: four-space indentation, one
//! statement per line, and parentheses around every compound operand.

use crate::ast::{
    ClassDecl, CompilationUnit, ExprKind, FieldDecl, InitializerDecl, Member, MethodDecl,
    ParsedType, StmtKind,
};
use crate::{Block, ExprArena, ExprId, ParsedTypeId, StmtId, StmtRange, StringInterner};

const INDENT: &str = "    ";

#[derive(Default)]
struct Writer {
    out: String,
    indent: usize,
}

impl Writer {
    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }
}

/// Prints AST nodes stored in one arena.
pub struct UnitPrinter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
}

impl<'a> UnitPrinter<'a> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        UnitPrinter { arena, interner }
    }

    /// Print a whole compilation unit.
    pub fn print_unit(&self, unit: &CompilationUnit) -> String {
        let mut w = Writer::default();
        if !unit.package.is_empty() {
            w.line(&format!("package {};", self.interner.lookup(unit.package)));
            w.blank();
        }
        for import in &unit.imports {
            let keyword = if import.is_static { "import static" } else { "import" };
            let star = if import.on_demand { ".*" } else { "" };
            w.line(&format!(
                "{keyword} {}{star};",
                self.interner.lookup(import.path)
            ));
        }
        if !unit.imports.is_empty() {
            w.blank();
        }
        for (i, class) in unit.classes.iter().enumerate() {
            if i > 0 {
                w.blank();
            }
            self.emit_class(&mut w, class);
        }
        w.out
    }

    /// Print a statement list, one statement per line, without braces.
    pub fn print_stmts(&self, stmts: StmtRange) -> String {
        let mut w = Writer::default();
        for &stmt in self.arena.stmt_list(stmts) {
            self.emit_stmt(&mut w, stmt);
        }
        w.out
    }

    /// Print the statements of a block body, without braces.
    pub fn print_block(&self, block: Block) -> String {
        self.print_stmts(block.stmts)
    }

    pub fn print_stmt(&self, id: StmtId) -> String {
        let mut w = Writer::default();
        self.emit_stmt(&mut w, id);
        w.out
    }

    pub fn print_expr(&self, id: ExprId) -> String {
        let mut out = String::new();
        self.write_expr(&mut out, id);
        out
    }

    pub fn print_type(&self, id: ParsedTypeId) -> String {
        let mut out = String::new();
        self.write_type(&mut out, id);
        out
    }

    // Items

    fn emit_class(&self, w: &mut Writer, class: &ClassDecl) {
        w.line(&format!("class {} {{", self.interner.lookup(class.name)));
        w.indent += 1;
        for (i, member) in class.members.iter().enumerate() {
            if i > 0 {
                w.blank();
            }
            match member {
                Member::Field(field) => self.emit_field(w, field),
                Member::Method(method) => self.emit_method(w, method),
                Member::Initializer(init) => self.emit_initializer(w, init),
            }
        }
        w.indent -= 1;
        w.line("}");
    }

    fn emit_field(&self, w: &mut Writer, field: &FieldDecl) {
        let modifier = if field.is_static { "static " } else { "" };
        let mut text = format!(
            "{modifier}{} {}",
            self.print_type(field.ty),
            self.interner.lookup(field.name)
        );
        if field.init.is_valid() {
            text.push_str(" = ");
            self.write_expr(&mut text, field.init);
        }
        text.push(';');
        w.line(&text);
    }

    fn emit_method(&self, w: &mut Writer, method: &MethodDecl) {
        let modifier = if method.is_static { "static " } else { "" };
        let ret = if method.return_ty.is_valid() {
            self.print_type(method.return_ty)
        } else {
            "void".to_string()
        };
        let params: Vec<String> = method
            .params
            .iter()
            .map(|p| format!("{} {}", self.print_type(p.ty), self.interner.lookup(p.name)))
            .collect();
        let header = format!(
            "{modifier}{ret} {}({})",
            self.interner.lookup(method.name),
            params.join(", ")
        );
        match method.body {
            Some(body) => {
                w.line(&format!("{header} {{"));
                self.emit_block_body(w, body);
                w.line("}");
            }
            None => w.line(&format!("{header};")),
        }
    }

    fn emit_initializer(&self, w: &mut Writer, init: &InitializerDecl) {
        w.line(if init.is_static { "static {" } else { "{" });
        self.emit_block_body(w, init.body);
        w.line("}");
    }

    // Statements

    fn emit_block_body(&self, w: &mut Writer, block: Block) {
        w.indent += 1;
        for &stmt in self.arena.stmt_list(block.stmts) {
            self.emit_stmt(w, stmt);
        }
        w.indent -= 1;
    }

    fn emit_nested(&self, w: &mut Writer, stmt: StmtId) {
        w.indent += 1;
        self.emit_stmt(w, stmt);
        w.indent -= 1;
    }

    fn emit_stmt(&self, w: &mut Writer, id: StmtId) {
        match self.arena.stmt(id).kind {
            StmtKind::Expr(expr) => w.line(&format!("{};", self.print_expr(expr))),
            StmtKind::Local {
                ty,
                name,
                init,
                is_final,
            } => {
                let modifier = if is_final { "final " } else { "" };
                let mut text = format!(
                    "{modifier}{} {}",
                    self.print_type(ty),
                    self.interner.lookup(name)
                );
                if init.is_valid() {
                    text.push_str(" = ");
                    self.write_expr(&mut text, init);
                }
                text.push(';');
                w.line(&text);
            }
            StmtKind::Block(block) => {
                w.line("{");
                self.emit_block_body(w, block);
                w.line("}");
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let header = format!("if ({})", self.print_expr(cond));
                let then_is_block = self.emit_header_and_body(w, &header, then_branch);
                if else_branch.is_valid() {
                    let prefix = if then_is_block { "} else" } else { "else" };
                    let else_is_block = self.emit_header_and_body(w, prefix, else_branch);
                    if else_is_block {
                        w.line("}");
                    }
                } else if then_is_block {
                    w.line("}");
                }
            }
            StmtKind::While { cond, body } => {
                let header = format!("while ({})", self.print_expr(cond));
                if self.emit_header_and_body(w, &header, body) {
                    w.line("}");
                }
            }
            StmtKind::Switch { selector, cases } => {
                w.line(&format!("switch ({}) {{", self.print_expr(selector)));
                w.indent += 1;
                for case_id in cases.ids() {
                    let case = *self.arena.case(case_id);
                    if case.is_default() {
                        w.line("default:");
                    } else {
                        w.line(&format!("case {}:", self.print_expr(case.label)));
                    }
                    w.indent += 1;
                    for &stmt in self.arena.stmt_list(case.stmts) {
                        self.emit_stmt(w, stmt);
                    }
                    w.indent -= 1;
                }
                w.indent -= 1;
                w.line("}");
            }
            StmtKind::Return(value) => {
                if value.is_valid() {
                    w.line(&format!("return {};", self.print_expr(value)));
                } else {
                    w.line("return;");
                }
            }
            StmtKind::Break => w.line("break;"),
            StmtKind::Continue => w.line("continue;"),
            StmtKind::Empty => w.line(";"),
        }
    }

    /// Emit `header {` + body (leaving the brace open) or `header` + an
    /// indented single statement. Returns whether a brace was left open.
    fn emit_header_and_body(&self, w: &mut Writer, header: &str, body: StmtId) -> bool {
        if let StmtKind::Block(block) = self.arena.stmt(body).kind {
            w.line(&format!("{header} {{"));
            self.emit_block_body(w, block);
            true
        } else {
            w.line(header);
            self.emit_nested(w, body);
            false
        }
    }

    // Expressions

    fn write_operand(&self, out: &mut String, id: ExprId) {
        let compound = matches!(
            self.arena.expr(id).kind,
            ExprKind::Binary { .. } | ExprKind::Conditional { .. } | ExprKind::Assign { .. }
        );
        if compound {
            out.push('(');
            self.write_expr(out, id);
            out.push(')');
        } else {
            self.write_expr(out, id);
        }
    }

    fn write_args(&self, out: &mut String, args: crate::ExprRange) {
        out.push('(');
        for (i, &arg) in self.arena.expr_list(args).iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_expr(out, arg);
        }
        out.push(')');
    }

    fn write_expr(&self, out: &mut String, id: ExprId) {
        match self.arena.expr(id).kind {
            ExprKind::Int(value) => out.push_str(&value.to_string()),
            ExprKind::Bool(value) => out.push_str(if value { "true" } else { "false" }),
            ExprKind::Str(value) => {
                out.push('"');
                for c in self.interner.lookup(value).chars() {
                    match c {
                        '"' => out.push_str("\\\""),
                        '\\' => out.push_str("\\\\"),
                        '\n' => out.push_str("\\n"),
                        c => out.push(c),
                    }
                }
                out.push('"');
            }
            ExprKind::Null => out.push_str("null"),
            ExprKind::This => out.push_str("this"),
            ExprKind::Ident(name) => out.push_str(self.interner.lookup(name)),
            ExprKind::Field { receiver, field } => {
                self.write_operand(out, receiver);
                out.push('.');
                out.push_str(self.interner.lookup(field));
            }
            ExprKind::Index { receiver, index } => {
                self.write_operand(out, receiver);
                out.push('[');
                self.write_expr(out, index);
                out.push(']');
            }
            ExprKind::Call {
                receiver,
                method,
                args,
            } => {
                if receiver.is_valid() {
                    self.write_operand(out, receiver);
                    out.push('.');
                }
                out.push_str(self.interner.lookup(method));
                self.write_args(out, args);
            }
            ExprKind::New { ty, args } => {
                out.push_str("new ");
                self.write_type(out, ty);
                self.write_args(out, args);
            }
            ExprKind::Unary { op, operand } => {
                out.push_str(op.as_symbol());
                self.write_operand(out, operand);
            }
            ExprKind::Binary { op, left, right } => {
                self.write_operand(out, left);
                out.push(' ');
                out.push_str(op.as_symbol());
                out.push(' ');
                self.write_operand(out, right);
            }
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            } => {
                self.write_operand(out, cond);
                out.push_str(" ? ");
                self.write_operand(out, then_expr);
                out.push_str(" : ");
                self.write_operand(out, else_expr);
            }
            ExprKind::Assign { target, value } => {
                self.write_expr(out, target);
                out.push_str(" = ");
                self.write_expr(out, value);
            }
        }
    }

    // Types

    fn write_type(&self, out: &mut String, id: ParsedTypeId) {
        match *self.arena.parsed_type(id) {
            ParsedType::Primitive(prim) => out.push_str(prim.as_str()),
            ParsedType::Named { name, args } => {
                out.push_str(self.interner.lookup(name));
                if !args.is_empty() {
                    out.push('<');
                    for (i, &arg) in self.arena.type_list(args).iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        self.write_type(out, arg);
                    }
                    out.push('>');
                }
            }
            ParsedType::Array(elem) => {
                self.write_type(out, elem);
                out.push_str("[]");
            }
        }
    }
}
