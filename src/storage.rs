use embedded_storage::nor_flash::NorFlash;
use esp_bootloader_esp_idf::partitions::{
    self, DataPartitionSubType, PARTITION_TABLE_MAX_LEN, PartitionType,
};
use esp_hal::peripherals::FLASH;
use esp_storage::{FlashStorage, FlashStorageError};
use log::info;

#[derive(Debug)]
pub enum StorageError {
    PartitionTable(partitions::Error),
    NvsPartitionMissing,
    Erase(FlashStorageError),
}

impl From<partitions::Error> for StorageError {
    fn from(value: partitions::Error) -> Self {
        StorageError::PartitionTable(value)
    }
}

impl From<FlashStorageError> for StorageError {
    fn from(value: FlashStorageError) -> Self {
        StorageError::Erase(value)
    }
}

/// The ESP-IDF `nvs` data partition, located through the flash partition table.
pub struct NvsStorage {
    flash: FlashStorage<'static>,
}

impl NvsStorage {
    pub fn new(flash: FLASH<'static>) -> Self {
        NvsStorage {
            flash: FlashStorage::new(flash),
        }
    }

    /// Erases the whole `nvs` partition.
    pub fn erase_all(&mut self) -> Result<(), StorageError> {
        let mut table_buffer = [0u8; PARTITION_TABLE_MAX_LEN];
        let (offset, len) = {
            let table = partitions::read_partition_table(&mut self.flash, &mut table_buffer)?;
            let nvs = table
                .find_partition(PartitionType::Data(DataPartitionSubType::Nvs))?
                .ok_or(StorageError::NvsPartitionMissing)?;
            (nvs.offset(), nvs.len())
        };

        info!("Erasing nvs partition at {offset:#x} ({len} bytes)");
        self.flash.erase(offset, offset + len)?;
        Ok(())
    }
}
