//! Actions and action groups

/// How a group treats an action whose payload it may already hold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoalesceMode {
    /// Append every action
    #[default]
    None,
    /// Keep only the first action, ignore the rest
    First,
    /// Keep a single slot holding the most recent action
    Last,
    /// Skip an action equal to the one registered immediately before it
    ConsecutiveDuplicates,
    /// Skip an action equal to any action already in the group
    Duplicates,
}

/// A leaf, reversible unit carrying an opaque snapshot payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action<T> {
    payload: T,
}

impl<T> Action<T> {
    pub fn new(payload: T) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Emit the payload to the consumer
    pub fn perform(self, consumer: &mut impl FnMut(T)) {
        consumer(self.payload)
    }
}

/// A child of an [`ActionGroup`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<T> {
    Action(Action<T>),
    Group(ActionGroup<T>),
}

/// A composite of actions and nested groups, replayed last-added-first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionGroup<T> {
    children: Vec<Node<T>>,
    mode: CoalesceMode,
}

impl<T: PartialEq> ActionGroup<T> {
    pub fn new(mode: CoalesceMode) -> Self {
        Self {
            children: Vec::new(),
            mode,
        }
    }

    /// Wrap a single action in its own group
    pub fn with_action(action: Action<T>) -> Self {
        Self {
            children: vec![Node::Action(action)],
            mode: CoalesceMode::None,
        }
    }

    pub fn mode(&self) -> CoalesceMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    /// Add an action, applying the group's coalescing mode.
    ///
    /// Returns false if the action was dropped.
    pub fn add_action(&mut self, action: Action<T>) -> bool {
        match self.mode {
            CoalesceMode::None => {}
            CoalesceMode::First => {
                if self.actions().next().is_some() {
                    return false;
                }
            }
            CoalesceMode::Last => {
                if let Some(slot) = self.children.iter_mut().rev().find_map(|node| match node {
                    Node::Action(existing) => Some(existing),
                    Node::Group(_) => None,
                }) {
                    *slot = action;
                    return true;
                }
            }
            CoalesceMode::ConsecutiveDuplicates => {
                if matches!(self.children.last(), Some(Node::Action(last)) if *last == action) {
                    return false;
                }
            }
            CoalesceMode::Duplicates => {
                if self.actions().any(|existing| *existing == action) {
                    return false;
                }
            }
        }

        self.children.push(Node::Action(action));
        true
    }

    pub fn add_group(&mut self, group: ActionGroup<T>) {
        self.children.push(Node::Group(group));
    }

    /// The innermost open group, `depth` levels below this one
    pub(crate) fn open_child_mut(&mut self, depth: usize) -> Option<&mut ActionGroup<T>> {
        if depth == 0 {
            return Some(self);
        }
        match self.children.last_mut() {
            Some(Node::Group(child)) => child.open_child_mut(depth - 1),
            _ => None,
        }
    }

    /// Drop the trailing child group if it ended up empty
    pub(crate) fn prune_last_empty(&mut self) {
        if matches!(self.children.last(), Some(Node::Group(group)) if group.is_empty()) {
            self.children.pop();
        }
    }

    /// Replay children most-recent-first
    pub fn perform(self, consumer: &mut impl FnMut(T)) {
        for node in self.children.into_iter().rev() {
            match node {
                Node::Action(action) => action.perform(consumer),
                Node::Group(group) => group.perform(consumer),
            }
        }
    }

    fn actions(&self) -> impl Iterator<Item = &Action<T>> {
        self.children.iter().filter_map(|node| match node {
            Node::Action(action) => Some(action),
            Node::Group(_) => None,
        })
    }
}
