//! EMMA 告警分发仿真
//!
//! 1 个小区向 N 个接收终端多播一份 CAP 告警文档，
//! 记录每个终端的接收时刻并校验载荷重组。

use clap::Parser;
use emma_sim::alert::{sample_alert, AlertBroadcaster, AlertPayload, BroadcastConfig};
use emma_sim::error::SimError;
use emma_sim::net::RanWorld;
use emma_sim::report::{ReceiverReport, ReceptionReport, ReportEvent};
use emma_sim::sim::{SimTime, Simulator};
use emma_sim::topo::{build_cell, CellOpts};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "emma-sim",
    about = "EMMA 告警分发仿真：单小区向 N 个 UE 多播 CAP 文档"
)]
struct Args {
    /// CAP 载荷文件（启动时完整读入内存）
    #[arg(long, default_value = "alert123.xml")]
    cap_file: PathBuf,

    /// 运行前先生成一份示例 CAP 文档写入 --cap-file
    #[arg(long)]
    gen_cap: bool,

    /// 接收终端数量
    #[arg(long, default_value_t = 10)]
    receivers: usize,

    /// 分片大小（字节）
    #[arg(long, default_value_t = 1024)]
    chunk_bytes: usize,

    /// 首个分片的发送时刻（毫秒）
    #[arg(long, default_value_t = 1000)]
    start_delay_ms: u64,

    /// 相邻分片的发送间隔（毫秒）
    #[arg(long, default_value_t = 10)]
    interval_ms: u64,

    /// 仿真全局停止时刻（毫秒）；先于最后一个分片则截断序列
    #[arg(long, default_value_t = 5000)]
    stop_ms: u64,

    /// 输出接收报告 JSON 文件
    #[arg(long)]
    report_json: Option<PathBuf>,
}

fn main() -> ExitCode {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("emma-sim: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), SimError> {
    if args.gen_cap {
        std::fs::write(&args.cap_file, sample_alert("alert123")).map_err(|source| {
            SimError::Input {
                path: args.cap_file.display().to_string(),
                source,
            }
        })?;
    }

    let payload = AlertPayload::load(&args.cap_file)?;

    let mut sim = Simulator::default();
    let mut world = RanWorld::default();

    let cell = build_cell(
        &mut world,
        &CellOpts {
            receivers: args.receivers,
            ..CellOpts::default()
        },
    );

    let cfg = BroadcastConfig {
        chunk_bytes: args.chunk_bytes,
        start_delay: SimTime::from_millis(args.start_delay_ms),
        interval: SimTime::from_millis(args.interval_ms),
    };
    let handle = AlertBroadcaster::start(&mut sim, cell.enb, cell.group, payload.clone(), cfg)?;
    let chunk_count = payload.chunk_count(cfg.chunk_bytes);

    let stop = SimTime::from_millis(args.stop_ms);
    sim.run_until(stop, &mut world);

    if let Some(err) = world.failure.take() {
        return Err(err);
    }

    println!(
        "done @ {:?}, state={:?}, chunks_sent={}/{}, delivered_dgrams={}, delivered_bytes={}",
        sim.now(),
        handle.state(),
        handle.chunks_sent(),
        chunk_count,
        world.net.stats.delivered_dgrams,
        world.net.stats.delivered_bytes,
    );

    let mut receivers = Vec::with_capacity(cell.ues.len());
    let mut events = Vec::new();
    for (ue, log) in cell.ues.iter().zip(&cell.logs) {
        let log = log.lock().expect("reception log lock");
        let name = world.net.node_name(*ue).to_string();
        for ev in &log.events {
            events.push(ReportEvent {
                t_ns: ev.at.0,
                t_secs: ev.at.as_secs_f64(),
                receiver: ue.0,
                receiver_name: name.clone(),
                seq: ev.seq,
                bytes: ev.bytes,
            });
        }
        let complete = log.reassembled() == payload.bytes();
        println!(
            "{name}: received={} complete={complete}",
            log.count()
        );
        receivers.push(ReceiverReport {
            receiver: ue.0,
            receiver_name: name,
            received: log.count() as u64,
            complete,
        });
    }

    if let Some(path) = &args.report_json {
        events.sort_by_key(|e| (e.t_ns, e.seq, e.receiver));
        let report = ReceptionReport {
            payload_bytes: payload.len(),
            chunk_bytes: args.chunk_bytes,
            chunk_count,
            chunks_sent: handle.chunks_sent(),
            stop_ns: stop.0,
            receivers,
            events,
        };
        report.write_json(path)?;
    }

    Ok(())
}
