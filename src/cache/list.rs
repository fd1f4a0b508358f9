//! Lista de recência duplamente ligada.
//!
//! Os nós vivem em uma arena (`Vec`) e se ligam por índice. A cabeça é a
//! entrada usada há mais tempo (LRU) e a cauda a usada mais recentemente (MRU).
//! Slots liberados são reaproveitados por uma free list.

/// Índice nulo para links ausentes.
const NIL: usize = usize::MAX;

/// Handle opaco para uma entrada da lista.
///
/// Só pode ser criado pela própria lista, em [`RecencyList::append`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

/// Uma entrada em cache: chave, valor e posição na ordem de recência.
#[derive(Debug, Clone)]
pub struct Entry {
    pub key: String,
    pub value: String,
    prev: usize,
    next: usize,
}

/// Sequência ordenada por recência com append, remoção e move-to-tail em O(1).
#[derive(Debug)]
pub struct RecencyList {
    slots: Vec<Option<Entry>>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl RecencyList {
    /// Cria uma lista vazia.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    /// Cria uma lista vazia com espaço reservado para `capacity` entradas.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Adiciona uma entrada nova após a cauda atual.
    pub fn append(&mut self, key: String, value: String) -> EntryId {
        let entry = Entry {
            key,
            value,
            prev: NIL,
            next: NIL,
        };

        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(entry);
                idx
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        };

        self.link_at_tail(idx);
        self.len += 1;
        EntryId(idx)
    }

    /// Remove uma entrada da lista, devolvendo-a.
    ///
    /// Retorna `None` se o handle não aponta para uma entrada viva.
    pub fn remove(&mut self, id: EntryId) -> Option<Entry> {
        if !self.is_live(id.0) {
            return None;
        }

        self.unlink(id.0);
        self.len -= 1;
        self.free.push(id.0);
        self.slots[id.0].take()
    }

    /// Move uma entrada para a cauda (mais recente), sem realocar o nó.
    ///
    /// O handle continua válido depois da operação.
    pub fn move_to_tail(&mut self, id: EntryId) {
        if !self.is_live(id.0) || self.tail == id.0 {
            return;
        }

        self.unlink(id.0);
        self.link_at_tail(id.0);
    }

    /// Entrada usada há mais tempo.
    pub fn head(&self) -> Option<EntryId> {
        (self.head != NIL).then_some(EntryId(self.head))
    }

    /// Entrada usada mais recentemente.
    pub fn tail(&self) -> Option<EntryId> {
        (self.tail != NIL).then_some(EntryId(self.tail))
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove todas as entradas.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    /// Itera da cabeça (LRU) até a cauda (MRU).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn is_live(&self, idx: usize) -> bool {
        matches!(self.slots.get(idx), Some(Some(_)))
    }

    fn entry(&self, idx: usize) -> &Entry {
        self.slots[idx]
            .as_ref()
            .unwrap_or_else(|| unreachable!("link aponta para slot vazio: {idx}"))
    }

    fn entry_mut(&mut self, idx: usize) -> &mut Entry {
        self.slots[idx]
            .as_mut()
            .unwrap_or_else(|| unreachable!("link aponta para slot vazio: {idx}"))
    }

    fn link_at_tail(&mut self, idx: usize) {
        let old_tail = self.tail;
        {
            let node = self.entry_mut(idx);
            node.prev = old_tail;
            node.next = NIL;
        }

        if old_tail == NIL {
            self.head = idx;
        } else {
            self.entry_mut(old_tail).next = idx;
        }
        self.tail = idx;
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let node = self.entry(idx);
            (node.prev, node.next)
        };

        if prev == NIL {
            self.head = next;
        } else {
            self.entry_mut(prev).next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else {
            self.entry_mut(next).prev = prev;
        }

        let node = self.entry_mut(idx);
        node.prev = NIL;
        node.next = NIL;
    }
}

impl Default for RecencyList {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterador sobre as entradas em ordem de recência (LRU → MRU).
pub struct Iter<'a> {
    list: &'a RecencyList,
    cursor: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let entry = self.list.entry(self.cursor);
        self.cursor = entry.next;
        Some(entry)
    }
}
