use crate::style::Style;

use super::Visual;

/// What a layout description holds.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Text(String),
    Visual(Visual),
    Layout(Box<Description>),
    List(Vec<Content>),
    /// Identifier -> content, in insertion order.
    Keyed(Vec<(String, Content)>),
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Visual> for Content {
    fn from(visual: Visual) -> Self {
        Content::Visual(visual)
    }
}

impl From<Description> for Content {
    fn from(desc: Description) -> Self {
        Content::Layout(Box::new(desc))
    }
}

/// Declarative input for one container of the layout tree.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Description {
    pub id: Option<String>,
    pub style: Style,
    pub content: Option<Content>,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Appends to list content, turning any single content into a list.
    pub fn child(mut self, child: impl Into<Content>) -> Self {
        let child = child.into();
        self.content = Some(match self.content.take() {
            None => Content::List(vec![child]),
            Some(Content::List(mut items)) => {
                items.push(child);
                Content::List(items)
            }
            Some(other) => Content::List(vec![other, child]),
        });
        self
    }

    /// Appends a keyed entry, turning any non-keyed content into a list first.
    pub fn keyed(mut self, key: impl Into<String>, child: impl Into<Content>) -> Self {
        let entry = (key.into(), child.into());
        self.content = Some(match self.content.take() {
            None => Content::Keyed(vec![entry]),
            Some(Content::Keyed(mut entries)) => {
                entries.push(entry);
                Content::Keyed(entries)
            }
            Some(other) => Content::List(vec![other, Content::Keyed(vec![entry])]),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_promotes_single_content_to_list() {
        let desc = Description::new().content("a").child("b");
        assert_eq!(
            desc.content,
            Some(Content::List(vec![Content::from("a"), Content::from("b")]))
        );
    }

    #[test]
    fn keyed_entries_keep_insertion_order() {
        let desc = Description::new().keyed("z", "last").keyed("a", "first");
        let Some(Content::Keyed(entries)) = desc.content else {
            panic!("expected keyed content");
        };
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["z", "a"]);
    }
}
