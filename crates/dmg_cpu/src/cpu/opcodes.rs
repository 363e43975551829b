//! Opcode tables and read-only lookups over them.
//!
//! Both tables are built once on first use and never mutated. Every primary
//! slot is either a defined instruction or one of the eleven bytes the SM83
//! never assigned; every extended slot is defined.

use lazy_static::lazy_static;

use super::alu::ShiftOp;
use super::helpers::R8_NAMES;
use super::{Bus, Cpu};

pub(in crate::cpu) type Handler = fn(&mut Cpu, &mut dyn Bus, u8) -> u32;

/// One entry of an opcode table.
#[derive(Clone, Copy)]
pub(in crate::cpu) struct Instruction {
    pub mnemonic: &'static str,
    /// Total encoded length including the opcode.
    pub length: u8,
    pub handler: Handler,
}

#[derive(Clone, Copy)]
pub(in crate::cpu) enum Slot {
    Defined(Instruction),
    Illegal,
}

/// Primary opcodes with no meaning on SM83 hardware.
pub const ILLEGAL_OPCODES: [u8; 11] = [
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

macro_rules! instr {
    ($mnemonic:expr, $length:expr, $handler:expr) => {
        Slot::Defined(Instruction {
            mnemonic: $mnemonic,
            length: $length,
            handler: $handler,
        })
    };
}

macro_rules! illegal {
    () => {
        Slot::Illegal
    };
}

lazy_static! {
    static ref PRIMARY: [Slot; 256] = [
        // 0x00
        instr!("NOP", 1, Cpu::exec_nop),
        instr!("LD BC, d16", 3, Cpu::exec_ld_rr_d16),
        instr!("LD (BC), A", 1, Cpu::exec_ld_indirect_a),
        instr!("INC BC", 1, Cpu::exec_incdec_rr),
        instr!("INC B", 1, Cpu::exec_inc_r),
        instr!("DEC B", 1, Cpu::exec_dec_r),
        instr!("LD B, d8", 2, Cpu::exec_ld_r_d8),
        instr!("RLCA", 1, Cpu::exec_rotate_a),
        instr!("LD (a16), SP", 3, Cpu::exec_ld_a16_sp),
        instr!("ADD HL, BC", 1, Cpu::exec_add_hl_rr),
        instr!("LD A, (BC)", 1, Cpu::exec_ld_a_indirect),
        instr!("DEC BC", 1, Cpu::exec_incdec_rr),
        instr!("INC C", 1, Cpu::exec_inc_r),
        instr!("DEC C", 1, Cpu::exec_dec_r),
        instr!("LD C, d8", 2, Cpu::exec_ld_r_d8),
        instr!("RRCA", 1, Cpu::exec_rotate_a),
        // 0x10
        instr!("STOP", 2, Cpu::exec_stop),
        instr!("LD DE, d16", 3, Cpu::exec_ld_rr_d16),
        instr!("LD (DE), A", 1, Cpu::exec_ld_indirect_a),
        instr!("INC DE", 1, Cpu::exec_incdec_rr),
        instr!("INC D", 1, Cpu::exec_inc_r),
        instr!("DEC D", 1, Cpu::exec_dec_r),
        instr!("LD D, d8", 2, Cpu::exec_ld_r_d8),
        instr!("RLA", 1, Cpu::exec_rotate_a),
        instr!("JR r8", 2, Cpu::exec_jr_e8),
        instr!("ADD HL, DE", 1, Cpu::exec_add_hl_rr),
        instr!("LD A, (DE)", 1, Cpu::exec_ld_a_indirect),
        instr!("DEC DE", 1, Cpu::exec_incdec_rr),
        instr!("INC E", 1, Cpu::exec_inc_r),
        instr!("DEC E", 1, Cpu::exec_dec_r),
        instr!("LD E, d8", 2, Cpu::exec_ld_r_d8),
        instr!("RRA", 1, Cpu::exec_rotate_a),
        // 0x20
        instr!("JR NZ, r8", 2, Cpu::exec_jr_cc),
        instr!("LD HL, d16", 3, Cpu::exec_ld_rr_d16),
        instr!("LD (HL+), A", 1, Cpu::exec_ld_indirect_a),
        instr!("INC HL", 1, Cpu::exec_incdec_rr),
        instr!("INC H", 1, Cpu::exec_inc_r),
        instr!("DEC H", 1, Cpu::exec_dec_r),
        instr!("LD H, d8", 2, Cpu::exec_ld_r_d8),
        instr!("DAA", 1, Cpu::exec_daa),
        instr!("JR Z, r8", 2, Cpu::exec_jr_cc),
        instr!("ADD HL, HL", 1, Cpu::exec_add_hl_rr),
        instr!("LD A, (HL+)", 1, Cpu::exec_ld_a_indirect),
        instr!("DEC HL", 1, Cpu::exec_incdec_rr),
        instr!("INC L", 1, Cpu::exec_inc_r),
        instr!("DEC L", 1, Cpu::exec_dec_r),
        instr!("LD L, d8", 2, Cpu::exec_ld_r_d8),
        instr!("CPL", 1, Cpu::exec_cpl),
        // 0x30
        instr!("JR NC, r8", 2, Cpu::exec_jr_cc),
        instr!("LD SP, d16", 3, Cpu::exec_ld_rr_d16),
        instr!("LD (HL-), A", 1, Cpu::exec_ld_indirect_a),
        instr!("INC SP", 1, Cpu::exec_incdec_rr),
        instr!("INC (HL)", 1, Cpu::exec_inc_r),
        instr!("DEC (HL)", 1, Cpu::exec_dec_r),
        instr!("LD (HL), d8", 2, Cpu::exec_ld_r_d8),
        instr!("SCF", 1, Cpu::exec_scf),
        instr!("JR C, r8", 2, Cpu::exec_jr_cc),
        instr!("ADD HL, SP", 1, Cpu::exec_add_hl_rr),
        instr!("LD A, (HL-)", 1, Cpu::exec_ld_a_indirect),
        instr!("DEC SP", 1, Cpu::exec_incdec_rr),
        instr!("INC A", 1, Cpu::exec_inc_r),
        instr!("DEC A", 1, Cpu::exec_dec_r),
        instr!("LD A, d8", 2, Cpu::exec_ld_r_d8),
        instr!("CCF", 1, Cpu::exec_ccf),
        // 0x40
        instr!("LD B, B", 1, Cpu::exec_ld_r_r),
        instr!("LD B, C", 1, Cpu::exec_ld_r_r),
        instr!("LD B, D", 1, Cpu::exec_ld_r_r),
        instr!("LD B, E", 1, Cpu::exec_ld_r_r),
        instr!("LD B, H", 1, Cpu::exec_ld_r_r),
        instr!("LD B, L", 1, Cpu::exec_ld_r_r),
        instr!("LD B, (HL)", 1, Cpu::exec_ld_r_r),
        instr!("LD B, A", 1, Cpu::exec_ld_r_r),
        instr!("LD C, B", 1, Cpu::exec_ld_r_r),
        instr!("LD C, C", 1, Cpu::exec_ld_r_r),
        instr!("LD C, D", 1, Cpu::exec_ld_r_r),
        instr!("LD C, E", 1, Cpu::exec_ld_r_r),
        instr!("LD C, H", 1, Cpu::exec_ld_r_r),
        instr!("LD C, L", 1, Cpu::exec_ld_r_r),
        instr!("LD C, (HL)", 1, Cpu::exec_ld_r_r),
        instr!("LD C, A", 1, Cpu::exec_ld_r_r),
        // 0x50
        instr!("LD D, B", 1, Cpu::exec_ld_r_r),
        instr!("LD D, C", 1, Cpu::exec_ld_r_r),
        instr!("LD D, D", 1, Cpu::exec_ld_r_r),
        instr!("LD D, E", 1, Cpu::exec_ld_r_r),
        instr!("LD D, H", 1, Cpu::exec_ld_r_r),
        instr!("LD D, L", 1, Cpu::exec_ld_r_r),
        instr!("LD D, (HL)", 1, Cpu::exec_ld_r_r),
        instr!("LD D, A", 1, Cpu::exec_ld_r_r),
        instr!("LD E, B", 1, Cpu::exec_ld_r_r),
        instr!("LD E, C", 1, Cpu::exec_ld_r_r),
        instr!("LD E, D", 1, Cpu::exec_ld_r_r),
        instr!("LD E, E", 1, Cpu::exec_ld_r_r),
        instr!("LD E, H", 1, Cpu::exec_ld_r_r),
        instr!("LD E, L", 1, Cpu::exec_ld_r_r),
        instr!("LD E, (HL)", 1, Cpu::exec_ld_r_r),
        instr!("LD E, A", 1, Cpu::exec_ld_r_r),
        // 0x60
        instr!("LD H, B", 1, Cpu::exec_ld_r_r),
        instr!("LD H, C", 1, Cpu::exec_ld_r_r),
        instr!("LD H, D", 1, Cpu::exec_ld_r_r),
        instr!("LD H, E", 1, Cpu::exec_ld_r_r),
        instr!("LD H, H", 1, Cpu::exec_ld_r_r),
        instr!("LD H, L", 1, Cpu::exec_ld_r_r),
        instr!("LD H, (HL)", 1, Cpu::exec_ld_r_r),
        instr!("LD H, A", 1, Cpu::exec_ld_r_r),
        instr!("LD L, B", 1, Cpu::exec_ld_r_r),
        instr!("LD L, C", 1, Cpu::exec_ld_r_r),
        instr!("LD L, D", 1, Cpu::exec_ld_r_r),
        instr!("LD L, E", 1, Cpu::exec_ld_r_r),
        instr!("LD L, H", 1, Cpu::exec_ld_r_r),
        instr!("LD L, L", 1, Cpu::exec_ld_r_r),
        instr!("LD L, (HL)", 1, Cpu::exec_ld_r_r),
        instr!("LD L, A", 1, Cpu::exec_ld_r_r),
        // 0x70
        instr!("LD (HL), B", 1, Cpu::exec_ld_r_r),
        instr!("LD (HL), C", 1, Cpu::exec_ld_r_r),
        instr!("LD (HL), D", 1, Cpu::exec_ld_r_r),
        instr!("LD (HL), E", 1, Cpu::exec_ld_r_r),
        instr!("LD (HL), H", 1, Cpu::exec_ld_r_r),
        instr!("LD (HL), L", 1, Cpu::exec_ld_r_r),
        instr!("HALT", 1, Cpu::exec_halt),
        instr!("LD (HL), A", 1, Cpu::exec_ld_r_r),
        instr!("LD A, B", 1, Cpu::exec_ld_r_r),
        instr!("LD A, C", 1, Cpu::exec_ld_r_r),
        instr!("LD A, D", 1, Cpu::exec_ld_r_r),
        instr!("LD A, E", 1, Cpu::exec_ld_r_r),
        instr!("LD A, H", 1, Cpu::exec_ld_r_r),
        instr!("LD A, L", 1, Cpu::exec_ld_r_r),
        instr!("LD A, (HL)", 1, Cpu::exec_ld_r_r),
        instr!("LD A, A", 1, Cpu::exec_ld_r_r),
        // 0x80
        instr!("ADD A, B", 1, Cpu::exec_alu_r),
        instr!("ADD A, C", 1, Cpu::exec_alu_r),
        instr!("ADD A, D", 1, Cpu::exec_alu_r),
        instr!("ADD A, E", 1, Cpu::exec_alu_r),
        instr!("ADD A, H", 1, Cpu::exec_alu_r),
        instr!("ADD A, L", 1, Cpu::exec_alu_r),
        instr!("ADD A, (HL)", 1, Cpu::exec_alu_r),
        instr!("ADD A, A", 1, Cpu::exec_alu_r),
        instr!("ADC A, B", 1, Cpu::exec_alu_r),
        instr!("ADC A, C", 1, Cpu::exec_alu_r),
        instr!("ADC A, D", 1, Cpu::exec_alu_r),
        instr!("ADC A, E", 1, Cpu::exec_alu_r),
        instr!("ADC A, H", 1, Cpu::exec_alu_r),
        instr!("ADC A, L", 1, Cpu::exec_alu_r),
        instr!("ADC A, (HL)", 1, Cpu::exec_alu_r),
        instr!("ADC A, A", 1, Cpu::exec_alu_r),
        // 0x90
        instr!("SUB B", 1, Cpu::exec_alu_r),
        instr!("SUB C", 1, Cpu::exec_alu_r),
        instr!("SUB D", 1, Cpu::exec_alu_r),
        instr!("SUB E", 1, Cpu::exec_alu_r),
        instr!("SUB H", 1, Cpu::exec_alu_r),
        instr!("SUB L", 1, Cpu::exec_alu_r),
        instr!("SUB (HL)", 1, Cpu::exec_alu_r),
        instr!("SUB A", 1, Cpu::exec_alu_r),
        instr!("SBC A, B", 1, Cpu::exec_alu_r),
        instr!("SBC A, C", 1, Cpu::exec_alu_r),
        instr!("SBC A, D", 1, Cpu::exec_alu_r),
        instr!("SBC A, E", 1, Cpu::exec_alu_r),
        instr!("SBC A, H", 1, Cpu::exec_alu_r),
        instr!("SBC A, L", 1, Cpu::exec_alu_r),
        instr!("SBC A, (HL)", 1, Cpu::exec_alu_r),
        instr!("SBC A, A", 1, Cpu::exec_alu_r),
        // 0xA0
        instr!("AND B", 1, Cpu::exec_alu_r),
        instr!("AND C", 1, Cpu::exec_alu_r),
        instr!("AND D", 1, Cpu::exec_alu_r),
        instr!("AND E", 1, Cpu::exec_alu_r),
        instr!("AND H", 1, Cpu::exec_alu_r),
        instr!("AND L", 1, Cpu::exec_alu_r),
        instr!("AND (HL)", 1, Cpu::exec_alu_r),
        instr!("AND A", 1, Cpu::exec_alu_r),
        instr!("XOR B", 1, Cpu::exec_alu_r),
        instr!("XOR C", 1, Cpu::exec_alu_r),
        instr!("XOR D", 1, Cpu::exec_alu_r),
        instr!("XOR E", 1, Cpu::exec_alu_r),
        instr!("XOR H", 1, Cpu::exec_alu_r),
        instr!("XOR L", 1, Cpu::exec_alu_r),
        instr!("XOR (HL)", 1, Cpu::exec_alu_r),
        instr!("XOR A", 1, Cpu::exec_alu_r),
        // 0xB0
        instr!("OR B", 1, Cpu::exec_alu_r),
        instr!("OR C", 1, Cpu::exec_alu_r),
        instr!("OR D", 1, Cpu::exec_alu_r),
        instr!("OR E", 1, Cpu::exec_alu_r),
        instr!("OR H", 1, Cpu::exec_alu_r),
        instr!("OR L", 1, Cpu::exec_alu_r),
        instr!("OR (HL)", 1, Cpu::exec_alu_r),
        instr!("OR A", 1, Cpu::exec_alu_r),
        instr!("CP B", 1, Cpu::exec_alu_r),
        instr!("CP C", 1, Cpu::exec_alu_r),
        instr!("CP D", 1, Cpu::exec_alu_r),
        instr!("CP E", 1, Cpu::exec_alu_r),
        instr!("CP H", 1, Cpu::exec_alu_r),
        instr!("CP L", 1, Cpu::exec_alu_r),
        instr!("CP (HL)", 1, Cpu::exec_alu_r),
        instr!("CP A", 1, Cpu::exec_alu_r),
        // 0xC0
        instr!("RET NZ", 1, Cpu::exec_ret_cc),
        instr!("POP BC", 1, Cpu::exec_pop),
        instr!("JP NZ, a16", 3, Cpu::exec_jp_cc),
        instr!("JP a16", 3, Cpu::exec_jp_a16),
        instr!("CALL NZ, a16", 3, Cpu::exec_call_cc),
        instr!("PUSH BC", 1, Cpu::exec_push),
        instr!("ADD A, d8", 2, Cpu::exec_alu_d8),
        instr!("RST 00H", 1, Cpu::exec_rst),
        instr!("RET Z", 1, Cpu::exec_ret_cc),
        instr!("RET", 1, Cpu::exec_ret),
        instr!("JP Z, a16", 3, Cpu::exec_jp_cc),
        instr!("PREFIX CB", 2, Cpu::exec_prefix_cb),
        instr!("CALL Z, a16", 3, Cpu::exec_call_cc),
        instr!("CALL a16", 3, Cpu::exec_call_a16),
        instr!("ADC A, d8", 2, Cpu::exec_alu_d8),
        instr!("RST 08H", 1, Cpu::exec_rst),
        // 0xD0
        instr!("RET NC", 1, Cpu::exec_ret_cc),
        instr!("POP DE", 1, Cpu::exec_pop),
        instr!("JP NC, a16", 3, Cpu::exec_jp_cc),
        illegal!(),
        instr!("CALL NC, a16", 3, Cpu::exec_call_cc),
        instr!("PUSH DE", 1, Cpu::exec_push),
        instr!("SUB d8", 2, Cpu::exec_alu_d8),
        instr!("RST 10H", 1, Cpu::exec_rst),
        instr!("RET C", 1, Cpu::exec_ret_cc),
        instr!("RETI", 1, Cpu::exec_reti),
        instr!("JP C, a16", 3, Cpu::exec_jp_cc),
        illegal!(),
        instr!("CALL C, a16", 3, Cpu::exec_call_cc),
        illegal!(),
        instr!("SBC A, d8", 2, Cpu::exec_alu_d8),
        instr!("RST 18H", 1, Cpu::exec_rst),
        // 0xE0
        instr!("LDH (a8), A", 2, Cpu::exec_ldh_a8),
        instr!("POP HL", 1, Cpu::exec_pop),
        instr!("LD (C), A", 1, Cpu::exec_ldh_c),
        illegal!(),
        illegal!(),
        instr!("PUSH HL", 1, Cpu::exec_push),
        instr!("AND d8", 2, Cpu::exec_alu_d8),
        instr!("RST 20H", 1, Cpu::exec_rst),
        instr!("ADD SP, r8", 2, Cpu::exec_add_sp_e8),
        instr!("JP (HL)", 1, Cpu::exec_jp_hl),
        instr!("LD (a16), A", 3, Cpu::exec_ld_a16),
        illegal!(),
        illegal!(),
        illegal!(),
        instr!("XOR d8", 2, Cpu::exec_alu_d8),
        instr!("RST 28H", 1, Cpu::exec_rst),
        // 0xF0
        instr!("LDH A, (a8)", 2, Cpu::exec_ldh_a8),
        instr!("POP AF", 1, Cpu::exec_pop),
        instr!("LD A, (C)", 1, Cpu::exec_ldh_c),
        instr!("DI", 1, Cpu::exec_di),
        illegal!(),
        instr!("PUSH AF", 1, Cpu::exec_push),
        instr!("OR d8", 2, Cpu::exec_alu_d8),
        instr!("RST 30H", 1, Cpu::exec_rst),
        instr!("LD HL, SP+r8", 2, Cpu::exec_ld_hl_sp_e8),
        instr!("LD SP, HL", 1, Cpu::exec_ld_sp_hl),
        instr!("LD A, (a16)", 3, Cpu::exec_ld_a16),
        instr!("EI", 1, Cpu::exec_ei),
        illegal!(),
        illegal!(),
        instr!("CP d8", 2, Cpu::exec_alu_d8),
        instr!("RST 38H", 1, Cpu::exec_rst),
    ];

    static ref EXTENDED: Vec<Handler> = (0..=0xFFu8).map(extended_handler).collect();
}

/// Extended entries follow a fixed grid: bits 7..6 pick the group, bits
/// 5..3 the operation or bit number, bits 2..0 the operand.
fn extended_handler(cb: u8) -> Handler {
    match cb >> 6 {
        0 => Cpu::exec_cb_shift as Handler,
        1 => Cpu::exec_cb_bit,
        2 => Cpu::exec_cb_res,
        _ => Cpu::exec_cb_set,
    }
}

#[inline]
pub(in crate::cpu) fn primary(opcode: u8) -> Slot {
    PRIMARY[opcode as usize]
}

#[inline]
pub(in crate::cpu) fn extended(cb: u8) -> Handler {
    EXTENDED[cb as usize]
}

/// Whether `opcode` has a handler in the primary table.
pub fn is_implemented(opcode: u8) -> bool {
    matches!(primary(opcode), Slot::Defined(_))
}

/// Whether `opcode` is one of the bytes SM83 hardware never assigned.
pub fn is_illegal(opcode: u8) -> bool {
    matches!(primary(opcode), Slot::Illegal)
}

/// All primary opcodes with a handler, ascending.
pub fn implemented_opcodes() -> Vec<u8> {
    (0..=0xFFu8).filter(|&op| is_implemented(op)).collect()
}

/// Assembler mnemonic for a primary opcode, `None` for illegal bytes.
pub fn mnemonic(opcode: u8) -> Option<&'static str> {
    match primary(opcode) {
        Slot::Defined(instr) => Some(instr.mnemonic),
        Slot::Illegal => None,
    }
}

/// Encoded length in bytes (opcode plus immediates) of a primary opcode.
/// The 0xCB prefix reports 2. STOP reports 2 for its padding byte.
pub fn instruction_length(opcode: u8) -> Option<u8> {
    match primary(opcode) {
        Slot::Defined(instr) => Some(instr.length),
        Slot::Illegal => None,
    }
}

/// Mnemonic of a CB-prefixed instruction, e.g. `"BIT 3, (HL)"`.
pub fn extended_mnemonic(cb: u8) -> String {
    let operand = R8_NAMES[(cb & 0x07) as usize];
    let bit = (cb >> 3) & 0x07;
    match cb >> 6 {
        0 => format!("{} {}", ShiftOp::from_opcode(cb).name(), operand),
        1 => format!("BIT {bit}, {operand}"),
        2 => format!("RES {bit}, {operand}"),
        _ => format!("SET {bit}, {operand}"),
    }
}
