use anchor_lang::prelude::*;

/// Loads a record from an account that may not exist yet. An empty account,
/// or one this program does not own, reads as `None`.
pub fn read_record<T: AccountDeserialize>(info: &AccountInfo) -> Result<Option<T>> {
    if info.data_is_empty() || info.owner != &crate::ID {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map(Some)
}

pub fn write_record<T: AccountSerialize>(info: &AccountInfo, record: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    record.try_serialize(&mut &mut data[..])
}
