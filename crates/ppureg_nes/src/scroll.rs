/// PPUSCROLL ($2005): X offset on the first write, Y on the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRegister {
    pub scroll_x: u8,
    pub scroll_y: u8,
    x_next: bool,
}

impl Default for ScrollRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollRegister {
    pub fn new() -> Self {
        Self {
            scroll_x: 0,
            scroll_y: 0,
            x_next: true,
        }
    }

    pub fn write(&mut self, data: u8) {
        if self.x_next {
            self.scroll_x = data;
        } else {
            self.scroll_y = data;
        }
        self.x_next = !self.x_next;
    }

    pub fn reset_latch(&mut self) {
        self.x_next = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_x_and_y() {
        let mut scroll = ScrollRegister::new();
        scroll.write(10);
        scroll.write(20);
        scroll.write(30);
        assert_eq!((scroll.scroll_x, scroll.scroll_y), (30, 20));
    }

    #[test]
    fn reset_latch_goes_back_to_x() {
        let mut scroll = ScrollRegister::new();
        scroll.write(10);
        scroll.reset_latch();
        scroll.write(99);
        assert_eq!((scroll.scroll_x, scroll.scroll_y), (99, 0));
    }
}
