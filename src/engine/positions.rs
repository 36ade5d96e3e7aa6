use crate::domain::{Seat, SeatIndex};

/// Позиция через `offset` мест от `from` по кругу.
pub fn offset_seat(from: SeatIndex, offset: usize, seat_count: usize) -> SeatIndex {
    if seat_count == 0 {
        return from;
    }
    ((from as usize + offset) % seat_count) as SeatIndex
}

/// Первое место, удовлетворяющее `pred`, при обходе по кругу начиная со `start`.
///
/// Если `include_start == false`, `start` проверяется последним (полный круг).
pub fn scan_from<F>(seats: &[Seat], start: SeatIndex, include_start: bool, pred: F) -> Option<SeatIndex>
where
    F: Fn(&Seat) -> bool,
{
    let n = seats.len();
    if n == 0 {
        return None;
    }
    let first = if include_start { 0 } else { 1 };
    (first..first + n)
        .map(|step| offset_seat(start, step, n))
        .find(|&idx| pred(&seats[idx as usize]))
}

/// Следующее место, которое ещё может действовать (не fold, не all-in).
pub fn next_eligible_seat(seats: &[Seat], start: SeatIndex, include_start: bool) -> Option<SeatIndex> {
    scan_from(seats, start, include_start, Seat::is_eligible)
}

/// Места в порядке обхода, начиная со следующего за `start`.
pub fn seats_after(start: SeatIndex, seat_count: usize) -> impl Iterator<Item = SeatIndex> {
    (1..=seat_count).map(move |step| offset_seat(start, step, seat_count))
}
