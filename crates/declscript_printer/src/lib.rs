//! declscript_printer: AST to text output.
//!
//! Converts a parsed [`SourceFile`] back into a formatted declaration
//! skeleton. The printed text is itself valid input for the parser, which is
//! what the structural round-trip tests rely on.

use declscript_ast::node::*;

/// Options for the printer.
pub struct PrinterOptions {
    /// Indentation string.
    pub indent_str: String,
    /// Newline string.
    pub new_line: String,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent_str: "    ".to_string(),
            new_line: "\n".to_string(),
        }
    }
}

/// The printer converts AST nodes to text.
pub struct Printer {
    output: String,
    indent_level: u32,
    options: PrinterOptions,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self::with_options(PrinterOptions::default())
    }

    pub fn with_options(options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(1024),
            indent_level: 0,
            options,
        }
    }

    /// Print a source file to a string.
    pub fn print_source_file(&mut self, file: &SourceFile) -> String {
        self.output.clear();
        if file.is_strict {
            self.write("\"use strict\";");
            self.write_newline();
        }
        for &stmt in &file.statements {
            self.write_indent();
            self.print_declaration(file, stmt);
            self.write_newline();
        }
        self.output.clone()
    }

    // ========================================================================
    // Declaration printing
    // ========================================================================

    fn print_declaration(&mut self, file: &SourceFile, id: NodeId) {
        match file.node(id) {
            Node::ModuleDeclaration(module) => self.print_module(file, module),
            Node::InterfaceDeclaration(iface) => self.print_interface(file, iface),
            // Only modules and interfaces appear in declaration position.
            _ => {}
        }
    }

    fn print_module(&mut self, file: &SourceFile, module: &ModuleDeclaration) {
        if module.is_export {
            self.write("export ");
        }
        self.write("module ");
        self.write(&module.name);
        if module.declarations.is_empty() {
            self.write(" { }");
            return;
        }
        self.write(" {");
        self.write_newline();
        self.indent_level += 1;
        for &decl in &module.declarations {
            self.write_indent();
            self.print_declaration(file, decl);
            self.write_newline();
        }
        self.indent_level -= 1;
        self.write_indent();
        self.write("}");
    }

    fn print_interface(&mut self, file: &SourceFile, iface: &InterfaceDeclaration) {
        if iface.is_export {
            self.write("export ");
        }
        self.write("interface ");
        self.write(&iface.name);
        if let Some(base) = iface.base {
            if let Node::TypeReference(r) = file.node(base) {
                self.write(" extends ");
                self.write(&r.name);
            }
        }
        self.write(" ");
        self.print_type(file, iface.definition);
    }

    // ========================================================================
    // Type printing
    // ========================================================================

    fn print_type(&mut self, file: &SourceFile, id: NodeId) {
        match file.node(id) {
            Node::KeywordType(kw) => self.write(kw.keyword.text()),
            Node::TypeReference(r) => self.write(&r.name),
            Node::ArrayType(array) => {
                self.print_type(file, array.element);
                self.write("[]");
            }
            Node::StringLiteralUnion(union) => {
                for (i, value) in union.values.iter().enumerate() {
                    if i > 0 {
                        self.write(" | ");
                    }
                    self.output.push('\'');
                    self.output.push_str(value);
                    self.output.push('\'');
                }
            }
            Node::TypeLiteral(object) => self.print_type_literal(file, object),
            _ => {}
        }
    }

    fn print_type_literal(&mut self, file: &SourceFile, object: &TypeLiteral) {
        if object.members.is_empty() {
            self.write("{ }");
            return;
        }
        self.write("{");
        self.write_newline();
        self.indent_level += 1;
        for &member in &object.members {
            if let Node::PropertySignature(prop) = file.node(member) {
                self.write_indent();
                self.write(&prop.name);
                if prop.is_optional {
                    self.write("?");
                }
                self.write(": ");
                self.print_type(file, prop.type_node);
                self.write(";");
                self.write_newline();
            }
        }
        self.indent_level -= 1;
        self.write_indent();
        self.write("}");
    }

    // ========================================================================
    // Output helpers
    // ========================================================================

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_newline(&mut self) {
        self.output.push_str(&self.options.new_line);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.options.indent_str);
        }
    }
}
