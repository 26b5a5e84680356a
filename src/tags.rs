//! Reference deployment tag table: document containers 1, 3, 7 and
//! attributes 1001-1086 with their operator-facing Russian names and
//! declared maximum lengths.
//!
//! This is configuration data, not computed state; a custom deployment
//! builds its own table through [`DocumentRegistry::from_entries`].

use crate::field::FieldCodec::{self, Byte, Fvln, Stlv, UnixTime, Vln, U32};
use crate::registry::{DocumentRegistry, TagSpec};

fn text(maxlen: usize) -> FieldCodec {
    FieldCodec::String { maxlen }
}

/// Build the reference registry (89 entries).
pub fn fiscal() -> DocumentRegistry {
    let entries = [
        (1, TagSpec::new("Отчёт о фискализации", Stlv { maxlen: 658 })),
        (3, TagSpec::new("Кассовый чек", Stlv { maxlen: 32768 })),
        (7, TagSpec::new("Подтверждение оператора", Stlv { maxlen: 362 })),
        (1001, TagSpec::new("Автоматический режим", Byte)),
        (1002, TagSpec::new("Автономный режим", Byte)),
        (1003, TagSpec::new("Адрес банковского агента", text(256))),
        (1004, TagSpec::new("Адрес банковского субагента", text(256))),
        (1005, TagSpec::new("Адрес оператора по переводу денежных средств", text(256))),
        (1006, TagSpec::new("Адрес платежного агента", text(256))),
        (1007, TagSpec::new("Адрес платежного субагента", text(256))),
        (1008, TagSpec::new("Адрес покупателя", text(64))),
        (1009, TagSpec::new("Адрес расчетов", text(256))),
        (1010, TagSpec::new("Размер вознаграждения банковского агента (субагента)", Vln { maxlen: 8 })),
        (1011, TagSpec::new("Размер вознаграждения платежного агента (субагента)", Vln { maxlen: 8 })),
        (1012, TagSpec::new("Время, дата", UnixTime)),
        (1013, TagSpec::new("Заводской номер ККТ", text(10))),
        (1014, TagSpec::new("Значение типа строка", text(64))),
        (1015, TagSpec::new("Значение типа целое", U32)),
        (1016, TagSpec::new("ИНН оператора по переводу денежных средств", text(12))),
        (1017, TagSpec::new("ИНН ОФД", text(12))),
        (1018, TagSpec::new("ИНН пользователя", text(12))),
        (1019, TagSpec::new("Информационное cообщение", text(64))),
        (1020, TagSpec::new("ИТОГ", Vln { maxlen: 8 })),
        (1021, TagSpec::new("Кассир", text(64))),
        (1022, TagSpec::new("Код ответа ОФД", Byte)),
        (1023, TagSpec::new("Количество", Fvln { maxlen: 8 })),
        (1024, TagSpec::new("Наименование банковского агента", text(64))),
        (1025, TagSpec::new("Наименование банковского субагента", text(64))),
        (1026, TagSpec::new("Наименование оператора по переводу денежных средств", text(64))),
        (1027, TagSpec::new("Наименование платежного агента", text(64))),
        (1028, TagSpec::new("Наименование платежного субагента", text(64))),
        (1029, TagSpec::new("Наименование реквизита", text(64))),
        (1030, TagSpec::new("Наименование товара", text(64))),
        (1031, TagSpec::new("Наличными", Vln { maxlen: 8 })),
        (1032, TagSpec::new("Налог", Stlv { maxlen: 33 })),
        (1033, TagSpec::new("Налоги", Stlv { maxlen: 33 })),
        (1034, TagSpec::new("Наценка (ставка)", Fvln { maxlen: 8 })),
        (1035, TagSpec::new("Наценка (сумма)", Vln { maxlen: 8 })),
        (1036, TagSpec::new("Номер автомата", text(12))),
        (1037, TagSpec::new("Номер ККТ", text(20))),
        (1038, TagSpec::new("Номер смены", U32)),
        (1039, TagSpec::new("Зарезервирован", text(12))),
        (1040, TagSpec::new("Номер фискального документа", U32)),
        (1041, TagSpec::new("Заводской номер фискального накопителя", text(16))),
        (1042, TagSpec::new("Номер чека", U32)),
        (1043, TagSpec::new("Общая стоимость позиции с учетом скидок и наценок", Vln { maxlen: 8 })),
        (1044, TagSpec::new("Операция банковского агента", text(24))),
        (1045, TagSpec::new("операция банковского субагента", text(24))),
        (1046, TagSpec::new("ОФД", text(64))),
        (1047, TagSpec::new("Параметр настройки", Stlv { maxlen: 144 })),
        (1048, TagSpec::new("Пользователь", text(64))),
        (1049, TagSpec::new("Почтовый индекс", text(6))),
        (1050, TagSpec::new("Признак исчерпания ресурса ФН", Byte)),
        (1051, TagSpec::new("Признак необходимости срочной замены ФН", Byte)),
        (1052, TagSpec::new("Признак переполнения памяти ФН", Byte)),
        (1053, TagSpec::new("Признак превышения времени ожидания ответа ОФД", Byte)),
        (1054, TagSpec::new("Признак расчета", Byte)),
        (1055, TagSpec::new("Признак системы налогообложения", Byte)),
        (1056, TagSpec::new("Признак шифрования", Byte)),
        (1057, TagSpec::new("Применение платежными агентами (субагентами)", Byte)),
        (1058, TagSpec::new("Применение банковскими агентами (субагентами)", Byte)),
        (1059, TagSpec::new("Реквизиты товара", Stlv { maxlen: 132 })),
        (1060, TagSpec::new("Сайт налогового органа", text(64))),
        (1061, TagSpec::new("Сайт ОФД", text(64))),
        (1062, TagSpec::new("Зарезервирован", Byte)),
        (1063, TagSpec::new("Скидка (ставка)", Fvln { maxlen: 8 })),
        (1064, TagSpec::new("Скидка (сумма)", Vln { maxlen: 8 })),
        (1065, TagSpec::new("Сокращенное наименование налога", text(10))),
        (1066, TagSpec::new("Сообщение", text(256))),
        (1067, TagSpec::new("Сообщение оператора для ККТ", Stlv { maxlen: 216 })),
        (1068, TagSpec::new("Сообщение оператора для ФН", Stlv { maxlen: 169 })),
        (1069, TagSpec::new("Сообщение оператору", Stlv { maxlen: 328 })),
        (1070, TagSpec::new("Ставка налога", Fvln { maxlen: 5 })),
        (1071, TagSpec::new("Сторно товара", Stlv { maxlen: 132 })),
        (1072, TagSpec::new("Сумма налога", Vln { maxlen: 8 })),
        (1073, TagSpec::new("Телефон банковского агента", text(19))),
        (1074, TagSpec::new("Телефон платежного агента", text(19))),
        (1075, TagSpec::new("Телефон оператора по переводу денежных средств", text(19))),
        (1076, TagSpec::new("Тип сообщения", text(64))),
        (1077, TagSpec::new("Фискальный признак документа", text(6))),
        (1078, TagSpec::new("Фискальный признак оператора", text(18))),
        (1079, TagSpec::new("Цена за единицу", Vln { maxlen: 8 })),
        (1080, TagSpec::new("Штриховой код EAN13", text(16))),
        (1081, TagSpec::new("Электронными", Vln { maxlen: 8 })),
        (1082, TagSpec::new("Телефон банковского субагента", text(19))),
        (1083, TagSpec::new("Телефон платежного субагента", text(19))),
        (1084, TagSpec::new("Дополнительный реквизит", Stlv { maxlen: 328 })),
        (1085, TagSpec::new("Наименование дополнительного реквизита", text(64))),
        (1086, TagSpec::new("Значение дополнительного реквизита", text(256))),
    ];
    DocumentRegistry::from_table(entries)
}
