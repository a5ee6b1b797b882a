use std::collections::VecDeque;

use crate::shape::{Sequence, Shape, Substitute};

impl<T: Substitute> Sequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element(&mut self, index: usize) -> Option<&mut dyn Substitute> {
        self.get_mut(index).map(|value| value as &mut dyn Substitute)
    }
}

impl<T: Substitute> Substitute for Vec<T> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Sequence(self)
    }
}

impl<T: Substitute, const N: usize> Sequence for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn element(&mut self, index: usize) -> Option<&mut dyn Substitute> {
        self.get_mut(index).map(|value| value as &mut dyn Substitute)
    }
}

impl<T: Substitute, const N: usize> Substitute for [T; N] {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Sequence(self)
    }
}

impl<T: Substitute> Sequence for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn element(&mut self, index: usize) -> Option<&mut dyn Substitute> {
        self.get_mut(index).map(|value| value as &mut dyn Substitute)
    }
}

impl<T: Substitute> Substitute for VecDeque<T> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Sequence(self)
    }
}
