use crate::constants::{ADDRESS_MASK, DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_GLYPH_SIZE, FONT_OFFSET};
use crate::error::Fault;
use crate::opcode::Opcode;
use crate::state::State;

/// Where the program counter goes once an operation has run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// pc += 2
    Next,
    /// pc += 4
    Skip,
    /// pc = addr
    Jump(u16),
    /// pc stays put so the same instruction runs again
    Wait,
}

pub type Outcome = Result<Flow, Fault>;

fn skip_if(condition: bool) -> Outcome {
    if condition {
        Ok(Flow::Skip)
    } else {
        Ok(Flow::Next)
    }
}

/// clear
pub fn clr(_op: u16, state: &mut State) -> Outcome {
    state.frame_buffer = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
    Ok(Flow::Next)
}

/// PC = STACK.pop() + 2
pub fn ret(_op: u16, state: &mut State) -> Outcome {
    match state.stack.pop() {
        Some(address) => Ok(Flow::Jump(address.wrapping_add(2) & ADDRESS_MASK)),
        None => Err(Fault::StackUnderflow { address: state.pc }),
    }
}

/// PC = NNN
pub fn jump(op: u16, _state: &mut State) -> Outcome {
    Ok(Flow::Jump(op.nnn()))
}

/// STACK.push(PC); PC = NNN
pub fn call(op: u16, state: &mut State) -> Outcome {
    state.stack.push(state.pc);
    Ok(Flow::Jump(op.nnn()))
}

/// if Vx == NN then skip
pub fn skip_eq(op: u16, state: &mut State) -> Outcome {
    skip_if(state.v[op.x()] == op.nn())
}

/// if Vx != NN then skip
pub fn skip_ne(op: u16, state: &mut State) -> Outcome {
    skip_if(state.v[op.x()] != op.nn())
}

/// if Vx == Vy then skip
pub fn skip_eq_reg(op: u16, state: &mut State) -> Outcome {
    skip_if(state.v[op.x()] == state.v[op.y()])
}

/// if Vx != Vy then skip
pub fn skip_ne_reg(op: u16, state: &mut State) -> Outcome {
    skip_if(state.v[op.x()] != state.v[op.y()])
}

/// Vx = NN
pub fn load(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] = op.nn();
    Ok(Flow::Next)
}

/// Vx += NN
/// Overflow wraps and is dropped; VF is left alone
pub fn add(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] = state.v[op.x()].wrapping_add(op.nn());
    Ok(Flow::Next)
}

/// Vx = Vy
pub fn mv(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] = state.v[op.y()];
    Ok(Flow::Next)
}

/// Vx |= Vy
pub fn or(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] |= state.v[op.y()];
    Ok(Flow::Next)
}

/// Vx &= Vy
pub fn and(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] &= state.v[op.y()];
    Ok(Flow::Next)
}

/// Vx ^= Vy
pub fn xor(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] ^= state.v[op.y()];
    Ok(Flow::Next)
}

/// Vx += Vy; VF = carry
/// VF is written last, so with x = F the carry is kept
pub fn add_reg(op: u16, state: &mut State) -> Outcome {
    let (res, carry) = state.v[op.x()].overflowing_add(state.v[op.y()]);
    state.v[op.x()] = res;
    state.v[0xF] = carry as u8;
    Ok(Flow::Next)
}

/// VF = Vx > Vy; Vx -= Vy
/// VF is written first, so with x = F the difference is kept
pub fn sub(op: u16, state: &mut State) -> Outcome {
    let (vx, vy) = (state.v[op.x()], state.v[op.y()]);
    state.v[0xF] = (vx > vy) as u8;
    state.v[op.x()] = vx.wrapping_sub(vy);
    Ok(Flow::Next)
}

/// VF = shifted out bit; Vx >>= 1
/// Vy is not read
pub fn shr(op: u16, state: &mut State) -> Outcome {
    let vx = state.v[op.x()];
    state.v[0xF] = vx & 0x1;
    state.v[op.x()] = vx >> 1;
    Ok(Flow::Next)
}

/// VF = Vy > Vx; Vx = Vy - Vx
pub fn subn(op: u16, state: &mut State) -> Outcome {
    let (vx, vy) = (state.v[op.x()], state.v[op.y()]);
    state.v[0xF] = (vy > vx) as u8;
    state.v[op.x()] = vy.wrapping_sub(vx);
    Ok(Flow::Next)
}

/// VF = shifted out bit; Vx <<= 1
/// Vy is not read
pub fn shl(op: u16, state: &mut State) -> Outcome {
    let vx = state.v[op.x()];
    state.v[0xF] = vx >> 7;
    state.v[op.x()] = vx << 1;
    Ok(Flow::Next)
}

/// I = NNN
pub fn load_i(op: u16, state: &mut State) -> Outcome {
    state.i = op.nnn();
    Ok(Flow::Next)
}

/// PC = V0 + NNN
pub fn jump_v0(op: u16, state: &mut State) -> Outcome {
    Ok(Flow::Jump((u16::from(state.v[0x0]) + op.nnn()) & ADDRESS_MASK))
}

/// Vx = rand_byte & NN
pub fn rand(op: u16, state: &mut State) -> Outcome {
    let rand_byte: u8 = rand::random();
    state.v[op.x()] = rand_byte & op.nn();
    Ok(Flow::Next)
}

/// draw_sprite(x=Vx y=Vy size=N)
/// XORs the sprite at memory I..I+N onto the FrameBuffer at x, y.
///
/// Only the origin wraps around the screen; rows and columns that run past the
/// right or bottom edge are clipped. VF is set if any lit pixel was erased.
pub fn draw(op: u16, state: &mut State) -> Outcome {
    let origin_x = state.v[op.x()] as usize % DISPLAY_WIDTH;
    let origin_y = state.v[op.y()] as usize % DISPLAY_HEIGHT;
    let mut collision = false;

    for row in 0..op.n() as usize {
        let y = origin_y + row;
        if y >= DISPLAY_HEIGHT {
            break;
        }
        let sprite = state.read(state.i.wrapping_add(row as u16));
        for bit in 0..8 {
            let x = origin_x + bit;
            if x >= DISPLAY_WIDTH {
                break;
            }
            if (sprite >> (7 - bit)) & 0x1 == 0x1 {
                let pixel = &mut state.frame_buffer[y][x];
                collision |= *pixel;
                *pixel = !*pixel;
            }
        }
    }

    state.v[0xF] = collision as u8;
    state.draw_flag = true;
    Ok(Flow::Next)
}

/// if Vx.pressed then skip
pub fn skip_key(op: u16, state: &mut State) -> Outcome {
    skip_if(state.pressed_keys[(state.v[op.x()] & 0xF) as usize])
}

/// if !Vx.pressed then skip
pub fn skip_no_key(op: u16, state: &mut State) -> Outcome {
    skip_if(!state.pressed_keys[(state.v[op.x()] & 0xF) as usize])
}

/// Vx = DT
pub fn get_delay(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] = state.delay_timer;
    Ok(Flow::Next)
}

/// await keypress for Vx
/// Without a pressed key the pc stays put and this runs again on the next step
pub fn await_key(op: u16, state: &mut State) -> Outcome {
    match state.first_pressed_key() {
        Some(key) => {
            state.v[op.x()] = key;
            Ok(Flow::Next)
        }
        None => Ok(Flow::Wait),
    }
}

/// DT = Vx
pub fn set_delay(op: u16, state: &mut State) -> Outcome {
    state.delay_timer = state.v[op.x()];
    Ok(Flow::Next)
}

/// ST = Vx
pub fn set_sound(op: u16, state: &mut State) -> Outcome {
    state.sound_timer = state.v[op.x()];
    Ok(Flow::Next)
}

/// I += Vx
pub fn add_i(op: u16, state: &mut State) -> Outcome {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x()]));
    Ok(Flow::Next)
}

/// I = address of the font glyph for the low nibble of Vx
pub fn font(op: u16, state: &mut State) -> Outcome {
    let glyph = (state.v[op.x()] & 0xF) as usize;
    state.i = (FONT_OFFSET + glyph * FONT_GLYPH_SIZE) as u16;
    Ok(Flow::Next)
}

/// mem[I..I+3] = bcd(Vx)
pub fn bcd(op: u16, state: &mut State) -> Outcome {
    let vx = state.v[op.x()];
    let digits = [vx / 100, vx / 10 % 10, vx % 10];
    for (offset, digit) in digits.iter().enumerate() {
        state.write(state.i.wrapping_add(offset as u16), *digit);
    }
    Ok(Flow::Next)
}

/// mem[I..=I+x] = V0..=Vx
pub fn store(op: u16, state: &mut State) -> Outcome {
    for register in 0..=op.x() {
        state.write(state.i.wrapping_add(register as u16), state.v[register]);
    }
    Ok(Flow::Next)
}

/// V0..=Vx = mem[I..=I+x]
pub fn restore(op: u16, state: &mut State) -> Outcome {
    for register in 0..=op.x() {
        state.v[register] = state.read(state.i.wrapping_add(register as u16));
    }
    Ok(Flow::Next)
}
