use crate::alert::AlertSink;
use crate::net::{Datagram, GroupAddr, NodeId, Sink};
use crate::sim::SimTime;
use std::sync::Arc;

fn dgram(seq: u64, data: &[u8]) -> Datagram {
    Datagram {
        id: seq,
        seq,
        from: NodeId(0),
        group: GroupAddr::new([239, 255, 0, 1], 5000),
        data: Arc::from(data),
    }
}

#[test]
fn sink_logs_one_event_per_datagram_in_arrival_order() {
    let (mut sink, log) = AlertSink::new(NodeId(1), "ue0");

    sink.on_datagram(&dgram(0, b"hello "), SimTime::from_secs(1));
    sink.on_datagram(&dgram(1, b"world"), SimTime::from_millis(1010));

    let log = log.lock().expect("log lock");
    assert_eq!(log.count(), 2);
    assert_eq!(log.events[0].receiver, NodeId(1));
    assert_eq!(log.events[0].at, SimTime::from_secs(1));
    assert_eq!(log.events[0].seq, 0);
    assert_eq!(log.events[0].bytes, 6);
    assert_eq!(log.events[1].at, SimTime::from_millis(1010));
    assert_eq!(log.reassembled(), b"hello world");
}

// 重复投递不去重：一片一条。
#[test]
fn sink_does_not_deduplicate() {
    let (mut sink, log) = AlertSink::new(NodeId(2), "ue1");

    let d = dgram(0, b"xyz");
    sink.on_datagram(&d, SimTime::ZERO);
    sink.on_datagram(&d, SimTime::ZERO);

    let log = log.lock().expect("log lock");
    assert_eq!(log.count(), 2);
    assert_eq!(log.reassembled(), b"xyzxyz");
}

#[test]
fn sinks_are_independent() {
    let (mut a, log_a) = AlertSink::new(NodeId(1), "ue0");
    let (mut b, log_b) = AlertSink::new(NodeId(2), "ue1");

    a.on_datagram(&dgram(0, b"aa"), SimTime::ZERO);
    a.on_datagram(&dgram(1, b"bb"), SimTime(1));
    b.on_datagram(&dgram(0, b"aa"), SimTime::ZERO);

    assert_eq!(log_a.lock().expect("log lock").count(), 2);
    assert_eq!(log_b.lock().expect("log lock").count(), 1);
}
