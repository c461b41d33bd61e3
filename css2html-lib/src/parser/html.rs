//! This module contains functions and types for reading HTML into a small
//! node tree that the pretty printer walks.
//!
//! Only html5ever's tokenizer runs here, not its tree builder, so elements
//! nest exactly as their tags are written:
//!
//! * a start tag opens an element inside the innermost open one
//! * void and self-closing tags never open anything
//! * an end tag closes the nearest open element of the same name; elements
//!   opened inside it and never closed stay unclosed
//! * an end tag with no open element of that name is kept as written

use crate::dom::is_void_element;
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use std::cell::RefCell;
use std::rc::Rc;

pub type Handle = Rc<RefCell<Node>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Document,
    Doctype {
        name: String,
    },
    Element {
        name: String,
        attributes: Vec<(String, String)>,
        /// Written as `<name ... />`, or a void element.
        self_closing: bool,
        /// A matching end tag was found.
        closed: bool,
    },
    /// An end tag that did not match any open element.
    StrayEndTag(String),
    Text(String),
    Comment(String),
}

#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub children: Vec<Handle>,
}

impl Node {
    fn new_handle(data: NodeData) -> Handle {
        Rc::new(RefCell::new(Node {
            data,
            children: Vec::new(),
        }))
    }

    /// Tag name, for element nodes.
    pub fn tag(&self) -> Option<&str> {
        match &self.data {
            NodeData::Element { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Tokenizes `html` and returns the document node holding everything read.
pub fn parse_html(html: &str) -> Handle {
    let tokenizer = Tokenizer::new(FormatTokenSink::new(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));
    // The sink never asks to pause for scripts, so one feed reads everything.
    let _ = tokenizer.feed(&input);
    tokenizer.end();
    tokenizer.sink.document.clone()
}

/// Content model the tokenizer switches to after these start tags.
fn raw_kind(tag: &str) -> Option<RawKind> {
    match tag {
        "script" => Some(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => Some(RawKind::Rawtext),
        "title" | "textarea" => Some(RawKind::Rcdata),
        _ => None,
    }
}

/// A TokenSink building [`Node`] trees.
pub struct FormatTokenSink {
    document: Handle,
    /// Elements opened and not closed yet, innermost last.
    open: RefCell<Vec<Handle>>,
}

impl Default for FormatTokenSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatTokenSink {
    pub fn new() -> Self {
        Self {
            document: Node::new_handle(NodeData::Document),
            open: RefCell::new(Vec::new()),
        }
    }

    fn current(&self) -> Handle {
        self.open
            .borrow()
            .last()
            .cloned()
            .unwrap_or_else(|| self.document.clone())
    }

    fn start_tag(&self, tag: Tag) -> TokenSinkResult<()> {
        let name = tag.name.to_string();
        let attributes = tag
            .attrs
            .into_iter()
            .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
            .collect();
        let self_closing = tag.self_closing || is_void_element(&name);

        let element = Node::new_handle(NodeData::Element {
            name: name.clone(),
            attributes,
            self_closing,
            closed: self_closing,
        });
        append_node(&self.current(), element.clone());
        if self_closing {
            return TokenSinkResult::Continue;
        }

        self.open.borrow_mut().push(element);
        match raw_kind(&name) {
            Some(kind) => TokenSinkResult::RawData(kind),
            None => TokenSinkResult::Continue,
        }
    }

    fn end_tag(&self, name: &str) {
        let mut open = self.open.borrow_mut();
        let Some(index) = open
            .iter()
            .rposition(|element| element.borrow().tag() == Some(name))
        else {
            log::debug!("keeping unmatched end tag </{}>", name);
            drop(open);
            append_node(
                &self.current(),
                Node::new_handle(NodeData::StrayEndTag(name.to_string())),
            );
            return;
        };

        let matched = open[index].clone();
        open.truncate(index);
        let mut matched = matched.borrow_mut();
        if let NodeData::Element { closed, .. } = &mut matched.data {
            *closed = true;
        }
    }
}

fn append_node(parent: &Handle, child: Handle) {
    parent.borrow_mut().children.push(child);
}

/// Adjacent text is merged into one node.
fn append_text(parent: &Handle, text: &str) {
    let last = parent.borrow().children.last().cloned();
    if let Some(last) = last {
        let mut last = last.borrow_mut();
        if let NodeData::Text(existing) = &mut last.data {
            existing.push_str(text);
            return;
        }
    }
    append_node(parent, Node::new_handle(NodeData::Text(text.to_string())));
}

impl TokenSink for FormatTokenSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => return self.start_tag(tag),
                TagKind::EndTag => self.end_tag(&tag.name),
            },
            Token::CharacterTokens(text) => append_text(&self.current(), &text),
            Token::CommentToken(text) => append_node(
                &self.current(),
                Node::new_handle(NodeData::Comment(text.to_string())),
            ),
            Token::DoctypeToken(doctype) => append_node(
                &self.current(),
                Node::new_handle(NodeData::Doctype {
                    name: doctype.name.map(|name| name.to_string()).unwrap_or_default(),
                }),
            ),
            Token::ParseError(msg) => log::debug!("HTML parse error: {}", msg),
            Token::NullCharacterToken | Token::EOFToken => {}
        }
        TokenSinkResult::Continue
    }
}
