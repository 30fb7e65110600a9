use leds_rs::disasm::source_listing;
use leds_rs::{assemble, execute, CpuConfig, LedPanel, Recorder};
use pretty_assertions::assert_eq;

fn run(src: &str) -> Vec<String> {
    let asm = assemble(src);
    let mut port = Recorder::new();
    execute(&asm.program, CpuConfig::default(), &mut port).unwrap();
    port.lines()
}

#[test]
fn single_out() {
    assert_eq!(run("ld a,129\nout (0),a\n"), vec!["*......*"]);
}

#[test]
fn stray_end_of_file_line_is_skipped() {
    let asm = assemble("ld a,129\nout (0),a\nend-of-file\n");
    assert_eq!(asm.diagnostics.len(), 1);
    assert_eq!(asm.diagnostics[0].line_no, 3);
    assert_eq!(run("ld a,129\nout (0),a\nend-of-file\n"), vec!["*......*"]);
}

#[test]
fn empty_program_halts_without_output() {
    let asm = assemble("");
    let mut port = Recorder::new();
    let cpu = execute(&asm.program, CpuConfig::default(), &mut port).unwrap();
    assert!(cpu.halted);
    assert_eq!(cpu.steps, 1);
    assert!(port.writes.is_empty());
}

#[test]
fn counted_loop_runs_three_times() {
    let src = "ld b,3\nloop:\nld a,1\nout (0),a\nrlca\ndjnz loop\n";
    assert_eq!(run(src), vec![".......*"; 3]);
}

#[test]
fn out_of_range_load_leaves_previous_value() {
    assert_eq!(run("  ld a,1\n  ld a,300\n  out (0),a\n"), vec![".......*"]);
}

#[test]
fn static_pattern() {
    let src = "
  ld a,14
  out (0),a
  ld a,12
  out (0),a
  ld a,8
  out (0),a

  out (0),a
  ld a,12
  out (0),a
  ld a,14
  out (0),a
";
    assert_eq!(
        run(src),
        vec!["....***.", "....**..", "....*...", "....*...", "....**..", "....***."]
    );
}

#[test]
fn triple_blink() {
    let src = "
  ld b,3

triple:
  ld a,126
  out (0),a
  ld a,60
  out (0),a
  ld a,24
  out (0),a
  djnz triple
";
    let frame = [".******.", "..****..", "...**..."];
    let expected: Vec<String> = frame.iter().cycle().take(9).map(|s| s.to_string()).collect();
    assert_eq!(run(src), expected);
}

#[test]
fn nested_counters_share_register_b() {
    // the inner djnz drains b, so the outer djnz falls through at once
    let src = "
  ld b,2
outer:
  ld a,1
inner:
  out (0),a
  rlca
  djnz inner
  djnz outer
";
    assert_eq!(run(src), vec![".......*", "......*."]);
}

#[test]
fn knight_rider() {
    let src = "
  ld b,7
  ld a,1
right:
  out (0),a
  rlca
  djnz right
  ld b,7
left:
  out (0),a
  rrca
  djnz left
  out (0),a
";
    assert_eq!(
        run(src),
        vec![
            ".......*", "......*.", ".....*..", "....*...", "...*....", "..*.....", ".*......",
            "*.......", ".*......", "..*.....", "...*....", "....*...", ".....*..", "......*.",
            ".......*",
        ]
    );
}

#[test]
fn panel_prints_lines() {
    let asm = assemble("  ld a,129\n  out (0),a\n  rrca\n  out (0),a\n");
    let mut panel = LedPanel::new(Vec::new());
    execute(&asm.program, CpuConfig::default(), &mut panel).unwrap();
    let text = String::from_utf8(panel.into_inner()).unwrap();
    assert_eq!(text, "*......*\n**......\n");
}

#[test]
fn listing_reassembles_to_same_program() {
    let src = "
  ld b,3
start:
  ld a,126
  out (0),a
again:
  rrca
  djnz again
  ld a,300
done:
";
    let first = assemble(src);
    let listing = source_listing(&first.program);
    assert_eq!(
        listing,
        "  ld b,3\nstart:\n  ld a,126\n  out (0),a\nagain:\n  rrca\n  djnz again\ndone:\n"
    );
    let second = assemble(&listing);
    assert!(second.diagnostics.is_empty());
    assert_eq!(second.program, first.program);
}
