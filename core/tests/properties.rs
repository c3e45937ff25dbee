mod common;

use std::time::Duration;

use proptest::prelude::*;

use common::{lit_pixels, run_ops};
use pulse8_core::Chip8;

fn set(register: u16, value: u8) -> u16 {
    0x6000 | register << 8 | u16::from(value)
}

proptest! {
    #[test]
    fn add_wraps_and_flags_carry(vx in any::<u8>(), vy in any::<u8>()) {
        let (chip8, _) = run_ops(&[set(1, vx), set(2, vy), 0x8124], &[]);
        let sum = u16::from(vx) + u16::from(vy);
        prop_assert_eq!(chip8.v()[0x1], (sum % 256) as u8);
        prop_assert_eq!(chip8.v()[0xF], (sum >= 256) as u8);
    }

    #[test]
    fn sub_flags_when_minuend_is_larger(vx in any::<u8>(), vy in any::<u8>()) {
        let (chip8, _) = run_ops(&[set(1, vx), set(2, vy), 0x8125], &[]);
        prop_assert_eq!(chip8.v()[0x1], vx.wrapping_sub(vy));
        prop_assert_eq!(chip8.v()[0xF], (vx > vy) as u8);
    }

    #[test]
    fn subn_flags_when_minuend_is_larger(vx in any::<u8>(), vy in any::<u8>()) {
        let (chip8, _) = run_ops(&[set(1, vx), set(2, vy), 0x8127], &[]);
        prop_assert_eq!(chip8.v()[0x1], vy.wrapping_sub(vx));
        prop_assert_eq!(chip8.v()[0xF], (vy > vx) as u8);
    }

    #[test]
    fn shifts_ignore_vy(vx in any::<u8>(), vy in any::<u8>()) {
        let (right, _) = run_ops(&[set(1, vx), set(2, vy), 0x8126], &[]);
        prop_assert_eq!(right.v()[0x1], vx >> 1);
        prop_assert_eq!(right.v()[0xF], vx & 0x1);
        prop_assert_eq!(right.v()[0x2], vy);

        let (left, _) = run_ops(&[set(1, vx), set(2, vy), 0x812E], &[]);
        prop_assert_eq!(left.v()[0x1], vx << 1);
        prop_assert_eq!(left.v()[0xF], vx >> 7);
        prop_assert_eq!(left.v()[0x2], vy);
    }

    #[test]
    fn random_respects_mask(nn in any::<u8>()) {
        let (chip8, _) = run_ops(&[0xC100 | u16::from(nn)], &[]);
        prop_assert_eq!(chip8.v()[0x1] & !nn, 0);
    }

    #[test]
    fn store_then_restore_round_trips(values in prop::collection::vec(any::<u8>(), 1..=16)) {
        let x = (values.len() - 1) as u16;
        let mut ops: Vec<u16> = values
            .iter()
            .enumerate()
            .map(|(register, value)| set(register as u16, *value))
            .collect();
        ops.push(0xA300);
        ops.push(0xF055 | x << 8);
        ops.extend((0..=x).map(|register| set(register, 0)));
        ops.push(0xF065 | x << 8);

        let (chip8, _) = run_ops(&ops, &[]);
        prop_assert_eq!(&chip8.v()[..values.len()], &values[..]);
        prop_assert_eq!(chip8.memory_window(0x300, values.len()), &values[..]);
    }

    #[test]
    fn drawing_twice_erases_and_collides(sprite in prop::collection::vec(1u8..=255, 1..=15), x in 0u8..=56, y in any::<u8>()) {
        let n = sprite.len() as u16;
        let ops = [0x00E0, 0xA300, set(0, x), set(1, y), 0xD010 | n, 0xD010 | n];
        let data: [(usize, &[u8]); 1] = [(0x100, &sprite[..])];

        let (chip8, host) = run_ops(&ops[..5], &data);
        prop_assert!(lit_pixels(chip8.framebuffer()) > 0);
        prop_assert_eq!(chip8.v()[0xF], 0);
        prop_assert_eq!(host.last_frame(), chip8.framebuffer());

        let (chip8, _) = run_ops(&ops, &data);
        prop_assert_eq!(lit_pixels(chip8.framebuffer()), 0);
        prop_assert_eq!(chip8.v()[0xF], 1);
    }

    #[test]
    fn timers_tick_once_per_period_however_time_is_sliced(
        chunks in prop::collection::vec(1u64..40_000_000, 1..64)
    ) {
        // V0 = 255; DT = V0; spin
        let rom = [0x60, 0xFF, 0xF0, 0x15, 0x12, 0x04];
        let mut chip8 = Chip8::new();
        chip8.load_rom(&rom, &mut ());
        for chunk in &chunks {
            chip8.advance(Duration::from_nanos(*chunk), &mut ());
        }

        let total: u128 = chunks.iter().map(|chunk| u128::from(*chunk)).sum();
        let ticks = total * 60 / 1_000_000_000;
        let expected = if ticks == 0 { 0 } else { 255u128.saturating_sub(ticks) };
        prop_assert_eq!(u128::from(chip8.delay_timer()), expected);
    }
}
