//! CPU and register file tests.

use div7_core::Cpu;
use div7_core::common::{Reg, RegisterFile};
use div7_core::isa::{DIVIDE_BY_SEVEN, Instruction, Shift};

#[test]
fn register_file_starts_zeroed() {
    let regs = RegisterFile::new();
    for reg in Reg::ALL {
        assert_eq!(regs.read(reg), 0);
    }
}

#[test]
fn register_signed_views_share_storage() {
    let mut regs = RegisterFile::new();
    regs.write_signed(Reg::R0, -6);
    assert_eq!(regs.read(Reg::R0), 0xFFFF_FFFA);
    regs.write(Reg::R1, 0x8000_0000);
    assert_eq!(regs.read_signed(Reg::R1), i32::MIN);
}

#[test]
fn reg_index_matches_position() {
    for (idx, reg) in Reg::ALL.iter().enumerate() {
        assert_eq!(reg.index(), idx);
    }
}

#[test]
fn ldr_loads_constant() {
    let mut cpu = Cpu::new();
    let event = cpu.step(&Instruction::Ldr {
        rd: Reg::R3,
        imm: 0x9249_2493,
    });
    assert_eq!(cpu.regs.read(Reg::R3), 0x9249_2493);
    assert_eq!(event.written(Reg::R3), Some(0x9249_2493));
    assert_eq!(event.product, None);
}

#[test]
fn smull_writes_low_then_high() {
    let mut cpu = Cpu::new();
    cpu.regs.write_signed(Reg::R0, 42);
    cpu.regs.write(Reg::R3, 0x9249_2493);
    let event = cpu.step(&Instruction::Smull {
        rd_lo: Reg::R2,
        rd_hi: Reg::R3,
        rn: Reg::R0,
        rm: Reg::R3,
    });

    assert_eq!(event.writes.len(), 2);
    assert_eq!(event.writes[0].reg, Reg::R2);
    assert_eq!(event.writes[1].reg, Reg::R3);
    assert_eq!(cpu.regs.read(Reg::R2), 30);
    assert_eq!(cpu.regs.read_signed(Reg::R3), -18);
    assert_eq!(event.product, Some(-77_309_411_298));
}

#[test]
fn mov_reads_source_before_overwriting_it() {
    let mut cpu = Cpu::new();
    cpu.regs.write_signed(Reg::R0, -100);
    let _event = cpu.step(&Instruction::Mov {
        rd: Reg::R0,
        rm: Reg::R0,
        shift: Shift::Asr(31),
    });
    assert_eq!(cpu.regs.read_signed(Reg::R0), -1);
}

#[test]
fn rsb_uses_shifted_second_operand() {
    let mut cpu = Cpu::new();
    cpu.regs.write_signed(Reg::R0, -1);
    cpu.regs.write_signed(Reg::R3, -5);
    let _event = cpu.step(&Instruction::Rsb {
        rd: Reg::R0,
        rn: Reg::R0,
        rm: Reg::R3,
        shift: Shift::Asr(2),
    });
    // (-5 >> 2) - (-1) = -2 + 1
    assert_eq!(cpu.regs.read_signed(Reg::R0), -1);
}

#[test]
fn execute_runs_program_and_numbers_steps() {
    let mut cpu = Cpu::new();
    cpu.regs.write_signed(Reg::R0, -13);
    let mut forwarded = Vec::new();
    let events = cpu
        .execute(&DIVIDE_BY_SEVEN, |event| {
            forwarded.push(event.step);
            Ok::<(), ()>(())
        })
        .unwrap();

    assert_eq!(events.len(), DIVIDE_BY_SEVEN.len());
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.step, i);
        assert_eq!(event.instruction, DIVIDE_BY_SEVEN[i]);
    }
    assert_eq!(forwarded, vec![0, 1, 2, 3, 4]);
    assert_eq!(cpu.regs.read_signed(Reg::R0), -1);
    assert_eq!(cpu.stats.instructions_retired, 5);
}

#[test]
fn execute_stops_at_first_callback_error() {
    let mut cpu = Cpu::new();
    cpu.regs.write_signed(Reg::R0, 42);
    let err = cpu
        .execute(&DIVIDE_BY_SEVEN, |event| {
            if event.step == 1 { Err(event.step) } else { Ok(()) }
        })
        .unwrap_err();

    assert_eq!(err, 1);
    // ldr and smull retired; add never ran.
    assert_eq!(cpu.stats.instructions_retired, 2);
    assert_eq!(cpu.regs.read_signed(Reg::R3), -18);
}
