//! Walkthrough of the pad session against a chain that prints every write.
//!
//! Run with: cargo run --example session_demo

use recorte_core::{FilterSettings, Stage, ranges};
use recorte_session::{PadId, PadSession, SignalChain};

/// Chain that logs each parameter write to stdout.
struct PrintChain;

impl SignalChain for PrintChain {
    fn apply_filter(&mut self, settings: &FilterSettings) {
        println!(
            "  chain: filter {} @ {:.0} Hz (Q {:.2}, {:.1} dB)",
            settings.filter_type.label(),
            settings.frequency,
            settings.bandwidth,
            settings.gain,
        );
    }
    fn set_compressor_threshold(&mut self, db: f32) {
        println!("  chain: compressor threshold {db:.1} dB");
    }
    fn set_expander_threshold(&mut self, db: f32) {
        println!("  chain: expander threshold {db:.1} dB");
    }
    fn set_expander_ratio(&mut self, ratio: f32) {
        println!("  chain: expander ratio {ratio:.2}");
    }
    fn set_attack_time(&mut self, seconds: f32) {
        println!("  chain: attack {:.1} ms", seconds * 1000.0);
    }
    fn set_release_time(&mut self, seconds: f32) {
        println!("  chain: release {:.1} ms", seconds * 1000.0);
    }
    fn set_master_gain(&mut self, db: f32) {
        println!("  chain: master gain {db:.1} dB");
    }
    fn set_distortion_mix(&mut self, percent: f32) {
        println!("  chain: distortion mix {percent:.0}%");
    }
    fn set_distortion_pre_gain(&mut self, db: f32) {
        println!("  chain: distortion pre-gain {db:.1} dB");
    }
    fn set_delay_mix(&mut self, percent: f32) {
        println!("  chain: delay mix {percent:.0}%");
    }
    fn set_delay_time(&mut self, seconds: f32) {
        println!("  chain: delay time {seconds:.2} s");
    }
    fn set_delay_feedback(&mut self, percent: f32) {
        println!("  chain: delay feedback {percent:.0}%");
    }
    fn set_delay_cutoff(&mut self, hz: f32) {
        println!("  chain: delay cutoff {hz:.0} Hz");
    }
    fn set_reverb_mix(&mut self, percent: f32) {
        println!("  chain: reverb mix {percent:.0}%");
    }
    fn set_pitch(&mut self, cents: f32) {
        println!("  chain: pitch {cents:.0} cents");
    }
    fn set_tempo(&mut self, ratio: f32) {
        println!("  chain: tempo x{ratio:.2}");
    }
    fn set_pan(&mut self, pan: f32) {
        println!("  chain: pan {pan:+.2}");
    }
    fn set_bypass(&mut self, stage: Stage, bypassed: bool) {
        println!("  chain: {stage:?} bypass {bypassed}");
    }
    fn reset_dynamics(&mut self) {
        println!("  chain: dynamics state reset");
    }
}

fn main() {
    println!("Recorte Session Demo");
    println!("====================\n");

    let mut session = PadSession::new(PrintChain);
    session.set_sample_loaded(true);

    let pad1 = PadId::new(1).unwrap();
    let pad2 = PadId::new(2).unwrap();

    println!("Selecting pad 1 (fresh pad, seeded from defaults):");
    session.select_pad(pad1);

    println!("\nDialing in a sound on pad 1:");
    session.set_normalized_filter_parameter(0.75);
    session.set_normalized_dynamics_threshold(0.4);
    session.set_distortion_mix(pad1, 80.0);
    session.toggle_stage_bypass(Stage::Filter);

    println!("\nLocal pitch +300 cents on top of a global -100:");
    session.set_global_pitch(-100.0);
    session.set_pad_pitch_offset(pad1, 300.0);
    println!("  combined: {:.0} cents", session.combined_pitch(pad1));

    println!("\nSelecting pad 2 (inherits the most-recent edits):");
    session.select_pad(pad2);
    let filter = session.current_filter_settings().unwrap();
    println!(
        "  pad 2 filter frequency: {:.0} {}",
        filter.frequency,
        ranges::FILTER_FREQUENCY.unit.suffix(),
    );

    println!("\nDemo complete! revision = {}", session.revision());
}
