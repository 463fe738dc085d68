/*
    Grammars that ship with the binary
*/

use super::{Grammar, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Builtin {
    /// Whole MiniJava programs, for feeding a MiniJava parser
    #[default]
    #[value(name = "minijava")]
    MiniJava,
    /// Short nonsense English sentences
    English,
}

impl Builtin {
    pub fn table(self) -> Table<'static> {
        match self {
            Builtin::MiniJava => MINIJAVA,
            Builtin::English => ENGLISH,
        }
    }

    pub fn grammar(self) -> Grammar {
        Grammar::from_table(self.table())
    }
}

// Identifiers and integer literals are drawn from small fixed pools so the
// output stays readable
pub const MINIJAVA: Table<'static> = &[
    ("Program", &[&["ClassDeclaration"]]),

    ("ClassDeclaration", &[&["class", "IDENT", "{", "\n", "ClassMemberList", "}", "\n"]]),
    ("ClassMemberList", &[&[], &["ClassMember", "\n", "ClassMemberList"]]),
    ("ClassMember", &[&["Field"], &["Method"], &["MainMethod"]]),

    ("Field", &[&["public", "Type", "IDENT", ";"]]),
    ("MainMethod", &[&["public", "static", "void", "IDENT", "(", "String", "[", "]", "IDENT", ")", "Block"]]),
    ("Method", &[&["public", "Type", "IDENT", "(", "ParametersOpt", ")", "Block"]]),
    ("ParametersOpt", &[&[], &["Parameters"]]),
    ("Parameters", &[&["Parameter", ",", "Parameters"], &["Parameter"]]),
    ("Parameter", &[&["Type", "IDENT"]]),

    ("Type", &[&["Type", "[", "]"], &["BasicType"]]),
    ("BasicType", &[&["int"], &["boolean"], &["void"], &["IDENT"]]),

    ("Statement", &[
        &["Block"],
        &["EmptyStatement"],
        &["IfStatement"],
        &["ExpressionStatement"],
        &["WhileStatement"],
        &["ReturnStatement"],
    ]),
    ("Block", &[&["{", "BlockStatementList", "}"]]),
    ("BlockStatementList", &[&[], &["BlockStatement", "\n", "BlockStatementList"]]),
    ("BlockStatement", &[&["Statement"], &["LocalVariableDeclarationStatement"]]),
    ("LocalVariableDeclarationStatement", &[&["Type", "IDENT", "LocVarAsnList", ";"]]),
    ("LocVarAsnList", &[&[], &["LocVarAsn", "LocVarAsnList"]]),
    ("LocVarAsn", &[&["=", "Expression"]]),
    ("EmptyStatement", &[&[";"]]),
    ("WhileStatement", &[&["while", "(", "Expression", ")", "Statement"]]),
    ("IfStatement", &[&["if", "(", "Expression", ")", "Statement", "OptElse"]]),
    ("OptElse", &[&[], &["else", "Statement"]]),
    ("ExpressionStatement", &[&["Expression", ";"]]),
    ("ReturnStatement", &[&["return", "ExpressionOpt", ";"]]),
    ("ExpressionOpt", &[&[], &["Expression"]]),

    ("Expression", &[&["AssignmentExpression"]]),
    ("AssignmentExpression", &[&["LogicalOrExpression", "AsnExprOpt"]]),
    ("AsnExprOpt", &[&[], &["=", "AssignmentExpression"]]),
    ("LogicalOrExpression", &[&["LogOrExprOpt", "LogicalAndExpression"]]),
    ("LogOrExprOpt", &[&[], &["LogicalOrExpression", "||"]]),
    ("LogicalAndExpression", &[&["LogAndExprOpt", "EqualityExpression"]]),
    ("LogAndExprOpt", &[&[], &["LogicalAndExpression", "&&"]]),
    ("EqualityExpression", &[&["EqExprOpt", "RelationalExpression"]]),
    ("EqExprOpt", &[&[], &["EqualityExpression", "=="], &["EqualityExpression", "!="]]),
    ("RelationalExpression", &[&["RelExprOpt", "AdditiveExpression"]]),
    ("RelExprOpt", &[
        &[],
        &["RelationalExpression", "<"],
        &["RelationalExpression", "<="],
        &["RelationalExpression", ">"],
        &["RelationalExpression", ">="],
    ]),
    ("AdditiveExpression", &[&["AddExprOpt", "MultiplicativeExpression"]]),
    ("AddExprOpt", &[&[], &["AdditiveExpression", "+"], &["AdditiveExpression", "-"]]),
    ("MultiplicativeExpression", &[&["MultExprOpt", "UnaryExpression"]]),
    ("MultExprOpt", &[
        &[],
        &["MultiplicativeExpression", "*"],
        &["MultiplicativeExpression", "/"],
        &["MultiplicativeExpression", "%"],
    ]),
    ("UnaryExpression", &[&["PostfixExpression"], &["!", "UnaryExpression"], &["-", "UnaryExpression"]]),

    ("PostfixExpression", &[&["PrimaryExpression", "PostfixOpList"]]),
    ("PostfixOpList", &[&[], &["PostfixOp", "PostfixOpList"]]),
    ("PostfixOp", &[&["MethodInvocation"], &["FieldAccess"], &["ArrayAccess"]]),
    ("MethodInvocation", &[&[".", "IDENT", "(", "ArgumentsOpt", ")"]]),
    ("FieldAccess", &[&[".", "IDENT"]]),
    ("ArrayAccess", &[&["[", "Expression", "]"]]),
    ("ArgumentsOpt", &[&[], &["Arguments"]]),
    ("Arguments", &[&["Expression", ",", "Arguments"], &["Expression"]]),

    ("PrimaryExpression", &[
        &["null"],
        &["false"],
        &["true"],
        &["INTEGER_LITERAL"],
        &["IDENT"],
        &["IDENT", "(", "Arguments", ")"],
        &["this"],
        &["(", "Expression", ")"],
        &["NewObjectExpression"],
        &["NewArrayExpression"],
    ]),
    ("NewObjectExpression", &[&["new", "IDENT", "(", ")"]]),
    ("NewArrayExpression", &[&["new", "BasicType", "[", "Expression", "]", "BracketListOpt"]]),
    ("BracketListOpt", &[&[], &["[", "]", "BracketListOpt"]]),

    ("INTEGER_LITERAL", &[&["0"], &["190"], &["42"]]),
    ("IDENT", &[&["a"], &["_1"], &["_x_"], &["a3_"]]),
];

pub const ENGLISH: Table<'static> = &[
    ("sentence", &[&["noun.phrase", "verb.phrase"]]),
    ("noun.phrase", &[&["adjective.phrase", "noun"], &["noun"]]),
    ("noun", &[&["ideas"]]),
    ("adjective.phrase", &[&["adjective", ",", "adjective.phrase"], &["adjective"]]),
    ("adjective", &[&["colorless"], &["green"]]),
    ("verb.phrase", &[&["verb", "adverb.phrase"], &["adverb", "verb", "noun.phrase"]]),
    ("verb", &[&["hug"], &["sleep"]]),
    ("adverb.phrase", &[&["adverb", ",", "adverb.phrase"], &["adverb"]]),
    ("adverb", &[&["furiously"]]),
];
