// Composite Pattern - tagged variants instead of an inheritance hierarchy
// A tree of nodes where composites aggregate children (leaves or other
// composites) and a single action recurses through the tree in insertion
// order. The Leaf/Composite split is a sum type, so child operations on a
// leaf are a compile-time error rather than a runtime no-op.

/// Terminal, childless node owning one opaque value.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf<T> {
    value: T,
}

impl<T> Leaf<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Terminal behavior: produces the owned value to the visitor.
    pub fn perform_action(&self, visit: &mut dyn FnMut(&T)) {
        visit(&self.value);
    }
}

/// Node aggregating other nodes and delegating the action to them.
///
/// Exclusively owns its ordered children, so cycles are unconstructible.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite<T> {
    children: Vec<Component<T>>,
}

impl<T> Default for Composite<T> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
        }
    }
}

impl<T> Composite<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child (leaf or composite).
    pub fn add(&mut self, child: impl Into<Component<T>>) {
        self.children.push(child.into());
    }

    /// Removes the first child equal to `child`.
    ///
    /// The tree owns its nodes, so matching is by value rather than by
    /// reference identity. Returns whether a child was removed; silent
    /// no-op when absent.
    pub fn remove(&mut self, child: &Component<T>) -> bool
    where
        T: PartialEq,
    {
        match self.children.iter().position(|c| c == child) {
            Some(index) => {
                self.children.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn children(&self) -> &[Component<T>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Invokes the action on every child in insertion order, recursively.
    ///
    /// An empty composite visits nothing. Results are not aggregated; the
    /// visitor is the side-effect channel.
    pub fn perform_action(&self, visit: &mut dyn FnMut(&T)) {
        for child in &self.children {
            child.perform_action(visit);
        }
    }
}

/// Common capability shared by tree nodes: a leaf or a composite.
#[derive(Debug, Clone, PartialEq)]
pub enum Component<T> {
    Leaf(Leaf<T>),
    Composite(Composite<T>),
}

impl<T> Component<T> {
    /// Shorthand for a leaf component.
    pub fn leaf(value: T) -> Self {
        Component::Leaf(Leaf::new(value))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Component::Leaf(_))
    }

    pub fn perform_action(&self, visit: &mut dyn FnMut(&T)) {
        match self {
            Component::Leaf(leaf) => leaf.perform_action(visit),
            Component::Composite(composite) => composite.perform_action(visit),
        }
    }
}

impl<T> From<Leaf<T>> for Component<T> {
    fn from(leaf: Leaf<T>) -> Self {
        Component::Leaf(leaf)
    }
}

impl<T> From<Composite<T>> for Component<T> {
    fn from(composite: Composite<T>) -> Self {
        Component::Composite(composite)
    }
}

// ============================================================================
// Tests
// ============================================================================
