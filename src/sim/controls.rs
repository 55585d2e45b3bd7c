use bitflags::bitflags;

bitflags! {
    /// Movement keys held during the current frame.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Controls: u8 {
        // Throttle (W).
        const FORWARD = 0x01;
        // Steer left (A). Wins when both steering keys are down.
        const LEFT    = 0x02;
        // Steer right (D).
        const RIGHT   = 0x04;
    }
}

/// Which way the wheel is being pushed this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
    Centre,
}

impl Controls {
    #[inline]
    pub fn steer(self) -> Steer {
        if self.contains(Controls::LEFT) {
            Steer::Left
        } else if self.contains(Controls::RIGHT) {
            Steer::Right
        } else {
            Steer::Centre
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_beats_right() {
        assert_eq!((Controls::LEFT | Controls::RIGHT).steer(), Steer::Left);
        assert_eq!(Controls::RIGHT.steer(), Steer::Right);
        assert_eq!(Controls::FORWARD.steer(), Steer::Centre);
    }
}
