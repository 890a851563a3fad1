/*!
# In-Process Channel Cohort

The one concrete [`Cohort`] this crate ships: `peers` OS threads, wired
together with `std::sync::mpsc` channels — one point-to-point channel per
ordered `(src, dst)` pair, a many-to-one channel for gather-to-root, and a
one-to-one channel per peer for broadcast-from-root. [`spawn_cohort`] builds
the wiring, spawns the threads, and joins their results.

FIFO delivery within a single `(src, dst)` pair — the ordering guarantee
spec.md §5 requires — falls directly out of `mpsc::channel`'s own ordering
guarantee, since each pair gets its own channel.
*/

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{Cohort, PrimCandidate};
use crate::core::edge::Edge;
use crate::core::error::{MstError, Result};
use crate::core::wire;

/// How long a blocking receive waits before re-checking the abort flag.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

struct Envelope {
    tag: u32,
    bytes: Vec<u8>,
}

/// One peer's end of an in-process, thread-backed cohort.
pub struct ChannelCohort {
    rank: usize,
    size: usize,
    send_to: HashMap<usize, Sender<Envelope>>,
    recv_from: HashMap<usize, Mutex<Receiver<Envelope>>>,
    gather_tx: Sender<PrimCandidate>,
    gather_rx: Option<Mutex<Receiver<PrimCandidate>>>,
    bcast_tx: Option<Vec<Sender<u32>>>,
    bcast_rx: Mutex<Receiver<u32>>,
    abort_flag: Arc<AtomicBool>,
}

impl ChannelCohort {
    fn recv_or_abort<T: Send>(&self, rx: &Mutex<Receiver<T>>) -> Result<T> {
        let rx = rx.lock().unwrap();
        loop {
            match rx.recv_timeout(POLL_INTERVAL) {
                Ok(value) => return Ok(value),
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    if self.abort_flag.load(Ordering::SeqCst) {
                        return Err(MstError::messaging("cohort aborted"));
                    }
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    return Err(MstError::messaging("peer disconnected before replying"));
                }
            }
        }
    }
}

impl Cohort for ChannelCohort {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }

    fn send_edges(&self, to: usize, tag: u32, edges: &[Edge]) -> Result<()> {
        let tx = self
            .send_to
            .get(&to)
            .ok_or_else(|| MstError::messaging(format!("no channel to peer {to}")))?;
        tx.send(Envelope {
            tag,
            bytes: wire::encode(edges),
        })
        .map_err(|_| MstError::messaging(format!("peer {to} is gone")))
    }

    fn recv_edges(&self, from: usize, tag: u32) -> Result<Vec<Edge>> {
        let rx = self
            .recv_from
            .get(&from)
            .ok_or_else(|| MstError::messaging(format!("no channel from peer {from}")))?;
        let envelope = self.recv_or_abort(rx)?;
        if envelope.tag != tag {
            return Err(MstError::messaging(format!(
                "expected tag {tag} from peer {from}, got {}",
                envelope.tag
            )));
        }
        wire::decode(&envelope.bytes)
    }

    fn gather_candidates(&self, candidate: PrimCandidate) -> Result<Option<Vec<PrimCandidate>>> {
        self.gather_tx
            .send(candidate)
            .map_err(|_| MstError::messaging("gather collector is gone"))?;
        match &self.gather_rx {
            Some(rx) => {
                let mut all = Vec::with_capacity(self.size);
                for _ in 0..self.size {
                    all.push(self.recv_or_abort(rx)?);
                }
                Ok(Some(all))
            }
            None => Ok(None),
        }
    }

    fn broadcast_vertex(&self, winner: Option<u32>) -> Result<u32> {
        match (&self.bcast_tx, winner) {
            (Some(senders), Some(value)) => {
                for tx in senders {
                    tx.send(value)
                        .map_err(|_| MstError::messaging("broadcast receiver is gone"))?;
                }
            }
            (Some(_), None) => {
                return Err(MstError::messaging("rank 0 must broadcast a value"));
            }
            (None, Some(_)) => {
                return Err(MstError::messaging("only rank 0 may broadcast a value"));
            }
            (None, None) => {}
        }
        self.recv_or_abort(&self.bcast_rx)
    }

    fn abort(&self, message: &str) -> MstError {
        self.abort_flag.store(true, Ordering::SeqCst);
        MstError::messaging(message.to_string())
    }
}

/// Builds a `peers`-peer in-process cohort and runs `body` once per peer on
/// its own OS thread, returning every peer's result in rank order.
///
/// A panic in any one peer's thread is reported as an `Err`; the other
/// threads are still joined (they will typically be unblocked by the
/// implicit channel disconnection and return an error of their own) so no
/// thread is leaked.
pub fn spawn_cohort<F, T>(peers: usize, body: F) -> Result<Vec<T>>
where
    F: Fn(ChannelCohort) -> T + Send + Sync + 'static,
    T: Send + 'static,
{
    if peers == 0 {
        return Err(MstError::messaging("a cohort needs at least one peer"));
    }

    let abort_flag = Arc::new(AtomicBool::new(false));

    let mut send_to: Vec<HashMap<usize, Sender<Envelope>>> = (0..peers).map(|_| HashMap::new()).collect();
    let mut recv_from: Vec<HashMap<usize, Mutex<Receiver<Envelope>>>> =
        (0..peers).map(|_| HashMap::new()).collect();
    for src in 0..peers {
        for dst in 0..peers {
            if src == dst {
                continue;
            }
            let (tx, rx) = mpsc::channel();
            send_to[src].insert(dst, tx);
            recv_from[dst].insert(src, Mutex::new(rx));
        }
    }

    let (gather_tx, gather_rx) = mpsc::channel::<PrimCandidate>();
    let mut gather_rx = Some(Mutex::new(gather_rx));

    let mut bcast_tx = Vec::with_capacity(peers);
    let mut bcast_rx: Vec<Option<Mutex<Receiver<u32>>>> = Vec::with_capacity(peers);
    for _ in 0..peers {
        let (tx, rx) = mpsc::channel::<u32>();
        bcast_tx.push(tx);
        bcast_rx.push(Some(Mutex::new(rx)));
    }
    let mut bcast_tx = Some(bcast_tx);

    let body = Arc::new(body);
    let mut handles = Vec::with_capacity(peers);
    for rank in (0..peers).rev() {
        let cohort = ChannelCohort {
            rank,
            size: peers,
            send_to: send_to.pop().unwrap(),
            recv_from: recv_from.pop().unwrap(),
            gather_tx: gather_tx.clone(),
            gather_rx: if rank == 0 { gather_rx.take() } else { None },
            bcast_tx: if rank == 0 { bcast_tx.take() } else { None },
            bcast_rx: bcast_rx[rank].take().unwrap(),
            abort_flag: Arc::clone(&abort_flag),
        };
        let body = Arc::clone(&body);
        handles.push(
            std::thread::Builder::new()
                .name(format!("mst-peer-{rank}"))
                .spawn(move || body(cohort))
                .map_err(|e| MstError::messaging(format!("failed to spawn peer {rank}: {e}")))?,
        );
    }
    handles.reverse();

    let mut results = Vec::with_capacity(peers);
    let mut first_panic = None;
    for (rank, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(value) => results.push(value),
            Err(_) => {
                abort_flag.store(true, Ordering::SeqCst);
                first_panic.get_or_insert_with(|| {
                    MstError::messaging(format!("peer {rank} panicked"))
                });
            }
        }
    }
    match first_panic {
        Some(err) => Err(err),
        None => Ok(results),
    }
}
