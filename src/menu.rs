use crate::display::{render_goodbye, render_menu, render_queue};
use crate::generator::{Generator, IdCounter};
use crate::queue::PieceQueue;
use crate::structs::{Piece, PieceKind};
use log::{info, warn};
use rand::Rng;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Play,
    AddRandom,
    AddManual,
    Exit,
}

impl MenuChoice {
    pub fn from_input(line: &str) -> Option<Self> {
        match line.trim().parse::<u32>().ok()? {
            1 => Some(MenuChoice::View),
            2 => Some(MenuChoice::Play),
            3 => Some(MenuChoice::AddRandom),
            4 => Some(MenuChoice::AddManual),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Owns the queue, the id counter and the generator for one run.
pub struct Session<R: Rng> {
    queue: PieceQueue,
    counter: IdCounter,
    generator: Generator<R>,
}

impl<R: Rng> Session<R> {
    pub fn new(generator: Generator<R>) -> Self {
        Self {
            queue: PieceQueue::new(),
            counter: IdCounter::new(),
            generator,
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn counter(&self) -> &IdCounter {
        &self.counter
    }

    /// Generates up to `count` random pieces and enqueues them, never past capacity.
    pub fn preload<W: Write>(&mut self, count: usize, output: &mut W) -> io::Result<()> {
        let free = self.queue.capacity() - self.queue.len();
        if count > free {
            warn!("preload of {count} pieces capped to {free} free slots");
        }
        for _ in 0..count.min(free) {
            self.add_random(output)?;
        }
        info!("preloaded {} pieces", self.queue.len());
        Ok(())
    }

    /// Runs the menu until the operator exits or input ends.
    pub fn run<I: BufRead, W: Write>(&mut self, input: &mut I, output: &mut W) -> io::Result<()> {
        loop {
            write!(output, "{}", render_menu())?;
            output.flush()?;

            let Some(line) = read_line(input)? else {
                info!("input closed, leaving menu");
                writeln!(output)?;
                write!(output, "\n{}", render_goodbye())?;
                return Ok(());
            };

            let Some(choice) = MenuChoice::from_input(&line) else {
                warn!("rejected menu option {:?}", line.trim());
                writeln!(output, "\n[ERROR] Invalid option! Choose between 1 and 5.")?;
                continue;
            };

            match choice {
                MenuChoice::View => {
                    write!(output, "{}", render_queue(&self.queue))?;
                }
                MenuChoice::Play => {
                    self.play(output)?;
                    write!(output, "{}", render_queue(&self.queue))?;
                }
                MenuChoice::AddRandom => {
                    self.add_random(output)?;
                    write!(output, "{}", render_queue(&self.queue))?;
                }
                MenuChoice::AddManual => {
                    if self.add_manual(input, output)? {
                        write!(output, "{}", render_queue(&self.queue))?;
                    }
                }
                MenuChoice::Exit => {
                    info!("operator chose exit");
                    write!(output, "\n{}", render_goodbye())?;
                    return Ok(());
                }
            }
        }
    }

    fn play<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        match self.queue.dequeue() {
            Ok(piece) => {
                info!("played {piece}, next up {:?}", self.queue.front());
                writeln!(output, "\n[OK] Piece played - {piece}")
            }
            Err(err) => {
                warn!("play rejected: {err}");
                writeln!(output, "\n[ERROR] Queue is empty! No pieces to play.")
            }
        }
    }

    fn add_random<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        let piece = self.generator.next(&mut self.counter);
        self.add(piece, output)
    }

    /// Returns false when the typed kind was rejected before reaching the queue.
    fn add_manual<I: BufRead, W: Write>(&mut self, input: &mut I, output: &mut W) -> io::Result<bool> {
        write!(output, "\nEnter piece kind (I/O/T/L): ")?;
        output.flush()?;

        let line = read_line(input)?.unwrap_or_default();
        match line.parse::<PieceKind>() {
            Ok(kind) => {
                let piece = Piece::new(kind, self.counter.next_id());
                self.add(piece, output)?;
                Ok(true)
            }
            Err(err) => {
                warn!("manual entry rejected: {err}");
                writeln!(output, "[ERROR] Invalid kind! Use I, O, T or L.")?;
                Ok(false)
            }
        }
    }

    fn add<W: Write>(&mut self, piece: Piece, output: &mut W) -> io::Result<()> {
        if let Err(err) = self.queue.enqueue(piece) {
            warn!("add of {piece} rejected: {err}");
            return writeln!(
                output,
                "\n[ERROR] Queue is full! Cannot add more pieces (limit: {}).",
                self.queue.capacity()
            );
        }
        info!("added {piece}");
        writeln!(output, "\n[OK] Piece added to queue - {piece}")
    }
}

/// Invalid UTF-8 is replaced rather than reported, so it reaches the normal input validation.
fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
